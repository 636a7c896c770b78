// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits for the objects the geometry drives.
//!
//! The core never talks to a rendering library directly. Hosts wrap their
//! stage/canvas, DOM container and image node in these traits.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use kurbo::{Point, Size, Vec2};

/// Name of the surface attribute holding the user zoom factor relative to
/// the fitted baseline.
pub const ZOOM_SCALE_ATTR: &str = "zoomScale";

/// A rendering surface with a pan/zoom transform.
///
/// This is the stage the image is drawn on: it has a logical size, a
/// per-axis scale and a pan offset, a small bag of named numeric attributes
/// and a way to request a redraw.
pub trait Surface {
    /// Logical size of the surface.
    fn size(&self) -> Size;
    /// Sets the logical size of the surface.
    fn set_size(&mut self, size: Size);
    /// Per-axis scale of the surface transform.
    fn scale(&self) -> Vec2;
    /// Sets the per-axis scale of the surface transform.
    fn set_scale(&mut self, scale: Vec2);
    /// Pan offset of the surface transform.
    fn position(&self) -> Point;
    /// Sets the pan offset of the surface transform.
    fn set_position(&mut self, position: Point);
    /// Reads a named attribute.
    fn attr(&self, name: &str) -> Option<f64>;
    /// Writes a named attribute.
    fn set_attr(&mut self, name: &str, value: f64);
    /// Schedules a redraw of the surface.
    fn batch_draw(&mut self);

    /// Current user zoom factor; `1.0` when it was never set.
    fn zoom_scale(&self) -> f64 {
        self.attr(ZOOM_SCALE_ATTR).unwrap_or(1.0)
    }
}

/// The element hosting the surface.
pub trait Container {
    /// Current client (inner) size.
    fn client_size(&self) -> Size;
}

/// The node the decoded image is attached to.
pub trait ContentNode {
    /// Sets the node size, in native-pixel units.
    fn set_size(&mut self, size: Size);
}

impl Container for Size {
    fn client_size(&self) -> Size {
        *self
    }
}

impl ContentNode for Size {
    fn set_size(&mut self, size: Size) {
        *self = size;
    }
}

/// A decoded image as seen by the viewport: its native pixel size and the
/// node that displays it.
#[derive(Clone, Debug)]
pub struct ImageLayer<N> {
    /// Native pixel size of the decoded image.
    pub native_size: Size,
    /// Node the image is attached to.
    pub node: N,
}

impl<N: ContentNode> ImageLayer<N> {
    /// Creates a layer for an image of the given native size.
    #[must_use]
    pub fn new(native_size: Size, node: N) -> Self {
        Self { native_size, node }
    }
}

/// In-memory [`Surface`] that only records state.
///
/// Useful for tests and for hosts that render elsewhere but still want the
/// geometry bookkeeping.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    size: Size,
    scale: Vec2,
    position: Point,
    attrs: BTreeMap<String, f64>,
    draw_count: u64,
}

impl HeadlessSurface {
    /// Creates a surface of the given size with an identity transform.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            scale: Vec2::new(1.0, 1.0),
            position: Point::ZERO,
            attrs: BTreeMap::new(),
            draw_count: 0,
        }
    }

    /// Number of redraws requested so far.
    #[must_use]
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn attr(&self, name: &str) -> Option<f64> {
        self.attrs.get(name).copied()
    }

    fn set_attr(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.attrs.get_mut(name) {
            *slot = value;
        } else {
            self.attrs.insert(name.to_string(), value);
        }
    }

    fn batch_draw(&mut self) {
        self.draw_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ContentNode, HeadlessSurface, Surface, ZOOM_SCALE_ATTR};

    #[test]
    fn headless_surface_records_state() {
        let mut surface = HeadlessSurface::new(Size::new(100.0, 50.0));
        assert_eq!(surface.size(), Size::new(100.0, 50.0));
        assert_eq!(surface.scale(), Vec2::new(1.0, 1.0));
        assert_eq!(surface.position(), Point::ZERO);

        surface.set_position(Point::new(3.0, 4.0));
        surface.set_scale(Vec2::new(2.0, 2.0));
        surface.batch_draw();
        surface.batch_draw();

        assert_eq!(surface.position(), Point::new(3.0, 4.0));
        assert_eq!(surface.scale(), Vec2::new(2.0, 2.0));
        assert_eq!(surface.draw_count(), 2);
    }

    #[test]
    fn zoom_scale_defaults_to_one() {
        let mut surface = HeadlessSurface::default();
        assert_eq!(surface.zoom_scale(), 1.0);
        surface.set_attr(ZOOM_SCALE_ATTR, 2.5);
        assert_eq!(surface.zoom_scale(), 2.5);
        surface.set_attr(ZOOM_SCALE_ATTR, 3.0);
        assert_eq!(surface.attr(ZOOM_SCALE_ATTR), Some(3.0));
        assert_eq!(surface.attr("other"), None);
    }

    #[test]
    fn size_works_as_container_and_node() {
        let mut node = Size::ZERO;
        node.set_size(Size::new(10.0, 20.0));
        assert_eq!(node, Size::new(10.0, 20.0));
    }
}
