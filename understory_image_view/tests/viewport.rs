// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_image_view` crate.
//!
//! These sweep the placement computation over a grid of container and image
//! sizes, then drive a headless surface through resize, zoom and drag the
//! way a host event loop would.

use kurbo::{Point, Size};
use understory_image_view::{
    FitMode, HeadlessSurface, ImageCanvasView, ImageLayer, Placement, Surface, ViewConfig,
    ZOOM_SCALE_ATTR, constrain_pan, round_half_up, round3,
};

const CONTAINERS: &[(f64, f64)] = &[
    (800.0, 600.0),
    (600.0, 800.0),
    (1024.0, 768.0),
    (1920.0, 1080.0),
    (333.0, 777.0),
    (500.0, 500.0),
    (1.0, 1.0),
];

const IMAGES: &[(f64, f64)] = &[
    (1600.0, 400.0),
    (400.0, 1600.0),
    (4032.0, 3024.0),
    (3024.0, 4032.0),
    (640.0, 480.0),
    (1.0, 1.0),
    (7.0, 3.0),
    (12345.0, 67.0),
];

fn grid() -> impl Iterator<Item = (Size, Size)> {
    CONTAINERS.iter().flat_map(|&(cw, ch)| {
        IMAGES
            .iter()
            .map(move |&(iw, ih)| (Size::new(cw, ch), Size::new(iw, ih)))
    })
}

#[test]
fn fill_follows_width_and_aspect_ratio() {
    for (container, image) in grid() {
        let p = Placement::compute(container, image, FitMode::Fill);
        let aspect = image.width / image.height;
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.width, container.width);
        assert_eq!(p.height, round_half_up(container.width / aspect));
        assert_eq!(p.scale, round3(container.width / image.width));
    }
}

#[test]
fn contain_stays_inside_container() {
    for (container, image) in grid() {
        let p = Placement::compute(container, image, FitMode::Contain);
        assert!(p.x >= 0.0 && p.y >= 0.0, "{container:?} {image:?} {p:?}");
        assert!(p.x + p.width <= container.width, "{container:?} {image:?} {p:?}");
        assert!(p.y + p.height <= container.height, "{container:?} {image:?} {p:?}");
        assert!(p.x == 0.0 || p.y == 0.0, "{container:?} {image:?} {p:?}");
    }
}

#[test]
fn contain_offsets_exactly_one_axis_when_aspects_differ() {
    for (container, image) in grid() {
        let p = Placement::compute(container, image, FitMode::Contain);
        let image_aspect = image.width / image.height;
        let container_aspect = container.width / container.height;
        if image_aspect == container_aspect {
            assert_eq!((p.x, p.y), (0.0, 0.0));
            continue;
        }
        let spare = if image_aspect < container_aspect {
            container.width - image.width * container.height / image.height
        } else {
            container.height - image.height * container.width / image.width
        };
        if spare >= 1.0 {
            assert!((p.x > 0.0) != (p.y > 0.0), "{container:?} {image:?} {p:?}");
        }
    }
}

#[test]
fn placement_is_idempotent() {
    for (container, image) in grid() {
        for mode in [FitMode::Fill, FitMode::Contain] {
            assert_eq!(
                Placement::compute(container, image, mode),
                Placement::compute(container, image, mode)
            );
        }
    }
}

#[test]
fn scale_maps_content_back_to_native_size() {
    // Scale is rounded to three decimals, so the round trip is approximate.
    let p = Placement::compute(
        Size::new(800.0, 600.0),
        Size::new(4032.0, 3024.0),
        FitMode::Contain,
    );
    let content = p.content_size();
    assert!((content.width - 4032.0).abs() / 4032.0 < 0.01);
    assert!((content.height - 3024.0).abs() / 3024.0 < 0.01);
}

#[test]
fn resize_always_resets_zoom_scale() {
    for prior in [0.25, 1.0, 2.0, 7.5] {
        let mut view = ImageCanvasView::default();
        let mut surface = HeadlessSurface::default();
        surface.set_attr(ZOOM_SCALE_ATTR, prior);
        let container = Size::new(1024.0, 768.0);
        let mut image = ImageLayer::new(Size::new(640.0, 480.0), Size::ZERO);

        view.resize(Some(&mut surface), Some(&container), &mut image);
        assert_eq!(surface.attr(ZOOM_SCALE_ATTR), Some(1.0));
    }
}

#[test]
fn unchanged_candidate_never_moves() {
    for (container, image) in grid() {
        let p = Placement::compute(container, image, FitMode::Contain);
        for zoom in [0.5, 1.0, 3.0] {
            let current = Point::new(p.x - 13.0, p.y + 7.0);
            assert_eq!(constrain_pan(&p, zoom, current, current, container), current);
        }
    }
}

#[test]
fn drag_session_never_pushes_image_further_out() {
    let mut view = ImageCanvasView::new(ViewConfig::default());
    let mut surface = HeadlessSurface::default();
    let container = Size::new(800.0, 600.0);
    let mut image = ImageLayer::new(Size::new(1600.0, 400.0), Size::ZERO);
    let placement = view
        .resize(Some(&mut surface), Some(&container), &mut image)
        .unwrap();
    view.zoom_at(&mut surface, Point::new(400.0, 300.0), 3.0);

    // Drag steadily to the left; the trailing limit is
    // 800 - 800 * 3 = -1600 for x.
    let trail = container.width - (placement.width + placement.x) * 3.0;
    let mut last = surface.position();
    for _ in 0..100 {
        let candidate = Point::new(last.x - 37.0, last.y);
        let accepted = view.pan_to(&mut surface, candidate).unwrap();
        assert!(accepted.x <= last.x);
        if accepted.x < last.x {
            assert!(accepted.x > trail);
        }
        last = accepted;
    }
    assert!(last.x > trail);
    assert!(last.x > trail - 1.0 && last.x <= trail + 37.0);
    assert_eq!(surface.draw_count(), 101);
}
