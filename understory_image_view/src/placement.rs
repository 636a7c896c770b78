// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use crate::modes::FitMode;

/// Where a fitted image sits inside its container.
///
/// `x`/`y` are the offset of the content inside the container (pixels,
/// before any user zoom), `width`/`height` are the rendered content size in
/// whole pixels, and `scale` is the content scale relative to the image's
/// native pixel size, rounded to three decimals.
///
/// A placement is recomputed from scratch on every resize or image load and
/// is read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Horizontal offset within the container.
    pub x: f64,
    /// Vertical offset within the container.
    pub y: f64,
    /// Rendered content width.
    pub width: f64,
    /// Rendered content height.
    pub height: f64,
    /// Content scale relative to native pixels.
    pub scale: f64,
}

impl Placement {
    /// Computes the placement of an image of native size `image` inside a
    /// container of size `container`.
    ///
    /// - [`FitMode::Fill`] matches the container width and derives the
    ///   height from the image aspect ratio; the placement starts at the
    ///   container origin.
    /// - [`FitMode::Contain`] scales the image so it is fully visible and
    ///   centers it along the axis with spare room.
    ///
    /// Both sizes must be positive. Zero dimensions are not checked here and
    /// produce non-finite results; callers validate image sizes when the
    /// image is loaded.
    ///
    /// ```rust
    /// use kurbo::Size;
    /// use understory_image_view::{FitMode, Placement};
    ///
    /// let p = Placement::compute(
    ///     Size::new(800.0, 600.0),
    ///     Size::new(1600.0, 400.0),
    ///     FitMode::Contain,
    /// );
    /// assert_eq!((p.x, p.y, p.width, p.height, p.scale), (0.0, 200.0, 800.0, 200.0, 0.5));
    /// ```
    #[must_use]
    pub fn compute(container: Size, image: Size, mode: FitMode) -> Self {
        let image_aspect = image.width / image.height;
        let container_aspect = container.width / container.height;

        let placement = match mode {
            FitMode::Fill => Self {
                x: 0.0,
                y: 0.0,
                width: round_half_up(container.width),
                height: round_half_up(container.width / image_aspect),
                scale: round3(container.width / image.width),
            },
            FitMode::Contain => {
                let mut width = container.width;
                let mut height = container.height;
                let mut x = 0.0;
                let mut y = 0.0;
                if image_aspect < container_aspect {
                    width = image.width * (container.height / image.height);
                    x = round_half_up((container.width - width) / 2.0);
                } else if image_aspect > container_aspect {
                    height = image.height * (container.width / image.width);
                    y = round_half_up((container.height - height) / 2.0);
                }
                Self {
                    x,
                    y,
                    width: round_half_up(width),
                    height: round_half_up(height),
                    scale: round3(width / image.width),
                }
            }
        };

        tracing::trace!(
            container_width = container.width,
            container_height = container.height,
            image_width = image.width,
            image_height = image.height,
            image_aspect,
            container_aspect,
            ?mode,
            ?placement,
            "computed image placement"
        );
        placement
    }

    /// Offset of the content inside the container.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rendered content size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Rendered content rectangle in container coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Content size expressed in native-pixel units.
    ///
    /// This is what the image node is sized to; the surface scale turns it
    /// back into [`Placement::size`] on screen.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.width / self.scale, self.height / self.scale)
    }
}

/// Rounds to the nearest integer, with halves rounded towards positive
/// infinity (`-2.5` → `-2`, `2.5` → `3`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to three decimal places using [`round_half_up`].
#[must_use]
pub fn round3(value: f64) -> f64 {
    round_half_up(value * 1000.0) / 1000.0
}
