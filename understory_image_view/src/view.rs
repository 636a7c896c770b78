// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::modes::{FitMode, ViewConfig, ZoomLimits};
use crate::pan::{pan_surface, zoom_about_pointer};
use crate::placement::Placement;
use crate::resize::resize_to_container;
use crate::surface::{Container, ContentNode, ImageLayer, Surface};

/// Stateful helper tying the fitting, panning and zooming operations to
/// the placement they share.
///
/// `ImageCanvasView` remembers the fit mode, the zoom limits and the
/// placement computed by the last successful [`ImageCanvasView::resize`].
/// Pan and zoom requests are judged against that placement until the next
/// resize replaces it.
#[derive(Clone, Debug, Default)]
pub struct ImageCanvasView {
    fit_mode: FitMode,
    zoom_limits: ZoomLimits,
    placement: Option<Placement>,
}

impl ImageCanvasView {
    /// Creates a view with the given configuration and no placement yet.
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            fit_mode: config.fit_mode,
            zoom_limits: config.zoom_limits,
            placement: None,
        }
    }

    /// Returns the fit mode used by [`ImageCanvasView::resize`].
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the fit mode. Takes effect on the next resize.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the zoom limits used by [`ImageCanvasView::zoom_at`].
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    /// Sets the zoom limits, normalizing them so that `min <= max`.
    pub fn set_zoom_limits(&mut self, min: f64, max: f64) {
        self.zoom_limits = ZoomLimits::new(min, max);
    }

    /// Placement from the last successful resize, if any.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Re-fits `image` into `container` on `surface`.
    ///
    /// See [`resize_to_container`]. When the surface or container is missing
    /// the previous placement is kept.
    pub fn resize<S, C, N>(
        &mut self,
        surface: Option<&mut S>,
        container: Option<&C>,
        image: &mut ImageLayer<N>,
    ) -> Option<Placement>
    where
        S: Surface + ?Sized,
        C: Container + ?Sized,
        N: ContentNode,
    {
        let placement = resize_to_container(surface, container, image, self.fit_mode)?;
        self.placement = Some(placement);
        Some(placement)
    }

    /// Pans `surface` towards `candidate` under the pan constraint.
    ///
    /// Returns the accepted offset, or `None` without touching the surface
    /// if no placement has been computed yet.
    pub fn pan_to<S: Surface + ?Sized>(&self, surface: &mut S, candidate: Point) -> Option<Point> {
        let placement = self.placement.as_ref()?;
        Some(pan_surface(surface, placement, candidate))
    }

    /// Zooms `surface` around `pointer` within the configured limits.
    ///
    /// Returns the resulting zoom factor.
    pub fn zoom_at<S: Surface + ?Sized>(&self, surface: &mut S, pointer: Point, factor: f64) -> f64 {
        zoom_about_pointer(surface, pointer, factor, self.zoom_limits)
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ImageCanvasViewDebugInfo {
        ImageCanvasViewDebugInfo {
            fit_mode: self.fit_mode,
            zoom_limits: self.zoom_limits,
            placement: self.placement,
        }
    }
}

/// Debug snapshot of an [`ImageCanvasView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ImageCanvasViewDebugInfo {
    /// Fit mode used on resize.
    pub fit_mode: FitMode,
    /// Zoom limits used by pointer zoom.
    pub zoom_limits: ZoomLimits,
    /// Placement from the last successful resize.
    pub placement: Option<Placement>,
}
