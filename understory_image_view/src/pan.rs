// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::modes::ZoomLimits;
use crate::placement::Placement;
use crate::surface::{Surface, ZOOM_SCALE_ATTR};

/// Decides which parts of a candidate pan offset to accept.
///
/// Each axis is judged on its own. Along x, `candidate.x` is accepted only
/// if both hold:
/// - it lies before the image's leading edge (`placement.x * zoom`) or it
///   moves backwards from `current.x`, and
/// - it lies after the trailing limit
///   (`surface.width - (placement.width + placement.x) * zoom`) or it moves
///   forwards from `current.x`.
///
/// Otherwise `current.x` is kept. The y axis works the same with heights.
///
/// This is a dead zone rather than a clamp: an offset that is already out of
/// range may still move back towards the range, but a move that pushes it
/// further out is dropped. No edge snapping takes place.
#[must_use]
pub fn constrain_pan(
    placement: &Placement,
    zoom_scale: f64,
    current: Point,
    candidate: Point,
    surface_size: Size,
) -> Point {
    let x = accept_axis(
        candidate.x,
        current.x,
        placement.x,
        placement.width,
        surface_size.width,
        zoom_scale,
    );
    let y = accept_axis(
        candidate.y,
        current.y,
        placement.y,
        placement.height,
        surface_size.height,
        zoom_scale,
    );
    Point::new(x, y)
}

fn accept_axis(
    candidate: f64,
    current: f64,
    offset: f64,
    extent: f64,
    surface_extent: f64,
    zoom: f64,
) -> f64 {
    let before_lead = candidate < offset * zoom || candidate < current;
    let after_trail = candidate > surface_extent - (extent + offset) * zoom || candidate > current;
    if before_lead && after_trail {
        candidate
    } else {
        current
    }
}

/// Moves `surface` towards `candidate`, subject to [`constrain_pan`].
///
/// Zoom, current offset and size are read from the surface itself. The
/// accepted offset is applied, a redraw is requested, and the accepted
/// offset is returned.
pub fn pan_surface<S: Surface + ?Sized>(
    surface: &mut S,
    placement: &Placement,
    candidate: Point,
) -> Point {
    let zoom = surface.zoom_scale();
    let size = surface.size();
    let accepted = constrain_pan(placement, zoom, surface.position(), candidate, size);
    tracing::trace!(
        width = size.width,
        height = size.height,
        zoom,
        x = accepted.x,
        y = accepted.y,
        "panned image surface"
    );
    surface.set_position(accepted);
    surface.batch_draw();
    accepted
}

/// Zooms `surface` by `factor` around `pointer`, keeping the content under
/// the pointer in place.
///
/// `pointer` is in surface (container) coordinates. The resulting
/// `zoomScale` attribute is clamped to `limits`; the surface scale changes
/// by the same effective factor. Returns the new zoom factor.
///
/// Non-positive or non-finite factors, and factors that the limits cancel
/// out, leave the surface untouched. A stored `zoomScale` that is not a
/// positive finite number is treated as the fitted baseline `1.0`.
pub fn zoom_about_pointer<S: Surface + ?Sized>(
    surface: &mut S,
    pointer: Point,
    factor: f64,
    limits: ZoomLimits,
) -> f64 {
    let stored = surface.zoom_scale();
    let old_zoom = if stored.is_finite() && stored > 0.0 {
        stored
    } else {
        1.0
    };
    if !factor.is_finite() || factor <= 0.0 {
        return old_zoom;
    }
    let new_zoom = limits.clamp(old_zoom * factor);
    let effective = new_zoom / old_zoom;
    if (effective - 1.0).abs() < f64::EPSILON {
        return old_zoom;
    }

    let scale = surface.scale();
    surface.set_scale(Vec2::new(scale.x * effective, scale.y * effective));
    let anchor = pointer - surface.position();
    surface.set_position(pointer - anchor * effective);
    surface.set_attr(ZOOM_SCALE_ATTR, new_zoom);
    surface.batch_draw();

    tracing::trace!(old_zoom, new_zoom, "zoomed image surface");
    new_zoom
}
