// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_view --heading-base-level=0

//! Understory Image View: fitting an image into a canvas and keeping it there.
//!
//! This crate provides the headless geometry behind an image canvas editor:
//! - Computing where an image of any aspect ratio sits inside a container,
//!   either filling the container width ([`FitMode::Fill`]) or staying fully
//!   visible ([`FitMode::Contain`]).
//! - Re-fitting a rendering surface when its container is resized.
//! - Constraining drag-driven pan offsets so the image cannot be pulled
//!   arbitrarily far out of view.
//! - Zooming around a pointer position.
//!
//! It does **not** decode images, handle input events or render anything.
//! Callers are expected to:
//! - Wrap their stage/canvas in [`Surface`], their host element in
//!   [`Container`] and their image node in [`ContentNode`].
//! - Decode images elsewhere (see `understory_image_source`) and pass the
//!   native pixel size along in an [`ImageLayer`].
//! - Translate pointer events into candidate offsets and zoom factors.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_image_view::{HeadlessSurface, ImageCanvasView, ImageLayer, Surface};
//!
//! let mut view = ImageCanvasView::default();
//! let mut surface = HeadlessSurface::default();
//! let container = Size::new(800.0, 600.0);
//! let mut image = ImageLayer::new(Size::new(1600.0, 400.0), Size::ZERO);
//!
//! // Fit the image; the surface now has the container size and a 0.5 scale.
//! let placement = view
//!     .resize(Some(&mut surface), Some(&container), &mut image)
//!     .unwrap();
//! assert_eq!(placement.y, 200.0);
//! assert_eq!(surface.scale().x, 0.5);
//!
//! // Zoom in on the center, then drag left.
//! view.zoom_at(&mut surface, Point::new(400.0, 300.0), 2.0);
//! let here = surface.position();
//! let accepted = view.pan_to(&mut surface, Point::new(here.x - 50.0, here.y));
//! assert_eq!(accepted, Some(Point::new(here.x - 50.0, here.y)));
//! ```
//!
//! ## Design notes
//!
//! - Placements are recomputed from scratch on every resize; nothing is
//!   adjusted incrementally.
//! - A resize always resets the user zoom factor (`zoomScale`) to `1.0`.
//! - The pan constraint is a per-axis dead zone, not a clamp. Offsets that
//!   are out of range may move back towards the range but never further out.
//! - Diagnostics are emitted as [`tracing`] events; no subscriber is
//!   installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod modes;
mod pan;
mod placement;
mod resize;
mod surface;
mod view;

pub use modes::{FitMode, ViewConfig, ZoomLimits};
pub use pan::{constrain_pan, pan_surface, zoom_about_pointer};
pub use placement::{Placement, round_half_up, round3};
pub use resize::resize_to_container;
pub use surface::{
    Container, ContentNode, HeadlessSurface, ImageLayer, Surface, ZOOM_SCALE_ATTR,
};
pub use view::{ImageCanvasView, ImageCanvasViewDebugInfo};
