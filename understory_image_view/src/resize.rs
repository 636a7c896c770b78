// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::modes::FitMode;
use crate::placement::Placement;
use crate::surface::{Container, ContentNode, ImageLayer, Surface, ZOOM_SCALE_ATTR};

/// Re-fits an image after its container changed size.
///
/// The surface takes the container's client size, the placement is
/// recomputed for `mode`, and the result is applied:
/// - the surface scale becomes the placement scale on both axes,
/// - the `zoomScale` attribute is reset to `1.0`, discarding any user zoom,
/// - the surface position becomes the placement offset,
/// - the image node is sized in native-pixel units
///   ([`Placement::content_size`]).
///
/// Returns `None` and changes nothing if the surface or the container is
/// missing, which is the normal state before the view is mounted.
pub fn resize_to_container<S, C, N>(
    surface: Option<&mut S>,
    container: Option<&C>,
    image: &mut ImageLayer<N>,
    mode: FitMode,
) -> Option<Placement>
where
    S: Surface + ?Sized,
    C: Container + ?Sized,
    N: ContentNode,
{
    let (Some(surface), Some(container)) = (surface, container) else {
        tracing::trace!("resize skipped: surface or container not mounted");
        return None;
    };

    let client = container.client_size();
    surface.set_size(client);

    let placement = Placement::compute(client, image.native_size, mode);
    surface.set_scale(Vec2::new(placement.scale, placement.scale));
    surface.set_attr(ZOOM_SCALE_ATTR, 1.0);
    surface.set_position(placement.origin());
    image.node.set_size(placement.content_size());

    tracing::debug!(
        width = client.width,
        height = client.height,
        ?mode,
        x = placement.x,
        y = placement.y,
        scale = placement.scale,
        "resized image surface"
    );
    Some(placement)
}
