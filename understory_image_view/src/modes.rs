// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How an image is fitted into its container.
///
/// This mode is consulted by [`crate::Placement::compute`],
/// [`crate::resize_to_container`] and [`crate::ImageCanvasView::resize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// Match the container width; the height follows the image aspect ratio.
    ///
    /// The content may overflow the container vertically (or leave space
    /// below it). The placement always starts at the container origin.
    Fill,
    /// Keep the whole image visible, letterboxing or pillarboxing on the
    /// axis that does not constrain the scale.
    ///
    /// The fitted content is centered along the free axis.
    #[default]
    Contain,
}

impl FitMode {
    /// Maps the host's "full width" toggle onto a fit mode.
    #[must_use]
    pub fn from_full_width(full_width: bool) -> Self {
        if full_width { Self::Fill } else { Self::Contain }
    }

    /// Returns `true` for [`FitMode::Fill`].
    #[must_use]
    pub fn is_full_width(self) -> bool {
        self == Self::Fill
    }
}

/// Bounds on the user zoom factor stored in the surface's `zoomScale`
/// attribute.
///
/// The zoom factor is relative to the fitted baseline: `1.0` means "as
/// placed by the last resize".
///
/// Limits always satisfy `0 < min <= max`; see [`ZoomLimits::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "ZoomLimitsRepr", into = "ZoomLimitsRepr")
)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// The limits used when none are configured.
    pub const DEFAULT: Self = Self {
        min: 1.0,
        max: 10.0,
    };

    /// Creates limits from two bounds, swapping them if given out of order.
    ///
    /// A bound that is NaN or not positive is replaced by the matching bound
    /// of [`ZoomLimits::DEFAULT`]. An infinite `max` leaves zoom unbounded
    /// above.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min > 0.0 { min } else { Self::DEFAULT.min };
        let max = if max > 0.0 { max } else { Self::DEFAULT.max };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Smallest allowed zoom factor.
    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Largest allowed zoom factor.
    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into `[min, max]`. A NaN `zoom` yields `min`.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Wire shape of [`ZoomLimits`]; deserialized values go through
/// [`ZoomLimits::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ZoomLimitsRepr {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl From<ZoomLimitsRepr> for ZoomLimits {
    fn from(repr: ZoomLimitsRepr) -> Self {
        Self::new(repr.min, repr.max)
    }
}

#[cfg(feature = "serde")]
impl From<ZoomLimits> for ZoomLimitsRepr {
    fn from(limits: ZoomLimits) -> Self {
        Self {
            min: limits.min,
            max: limits.max,
        }
    }
}

/// Configuration for an [`crate::ImageCanvasView`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Fit mode used on every resize.
    pub fit_mode: FitMode,
    /// Limits applied by pointer zoom.
    pub zoom_limits: ZoomLimits,
}

#[cfg(test)]
mod tests {
    use super::{FitMode, ZoomLimits};

    #[test]
    fn full_width_toggle_maps_to_fit_mode() {
        assert_eq!(FitMode::from_full_width(true), FitMode::Fill);
        assert_eq!(FitMode::from_full_width(false), FitMode::Contain);
        assert!(FitMode::Fill.is_full_width());
        assert!(!FitMode::default().is_full_width());
    }

    #[test]
    fn zoom_limits_are_normalized() {
        let limits = ZoomLimits::new(4.0, 0.5);
        assert_eq!(limits.min(), 0.5);
        assert_eq!(limits.max(), 4.0);
        assert_eq!(limits.clamp(8.0), 4.0);
        assert_eq!(limits.clamp(0.1), 0.5);
        assert_eq!(limits.clamp(2.0), 2.0);
    }

    #[test]
    fn nan_and_non_positive_bounds_fall_back_to_defaults() {
        let limits = ZoomLimits::new(f64::NAN, 4.0);
        assert_eq!((limits.min(), limits.max()), (1.0, 4.0));

        let limits = ZoomLimits::new(0.5, f64::NAN);
        assert_eq!((limits.min(), limits.max()), (0.5, 10.0));

        let limits = ZoomLimits::new(-3.0, 0.0);
        assert_eq!(limits, ZoomLimits::default());

        // NaN max larger than a given min still yields an ordered pair.
        let limits = ZoomLimits::new(20.0, f64::NAN);
        assert_eq!((limits.min(), limits.max()), (10.0, 20.0));
    }

    #[test]
    fn clamp_never_panics() {
        let limits = ZoomLimits::new(1.0, f64::INFINITY);
        assert_eq!(limits.clamp(1e300), 1e300);
        assert_eq!(limits.clamp(0.5), 1.0);
        assert_eq!(ZoomLimits::default().clamp(f64::NAN), 1.0);
        assert_eq!(ZoomLimits::default().clamp(f64::INFINITY), 10.0);
    }
}
