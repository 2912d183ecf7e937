//! Atlas layout and construction.

// Pixel coordinates fit comfortably in the lossy casts below.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::collections::HashMap;

use dieline_types::{PanelTree, Rect};
use image::{Rgba, RgbaImage};
use tracing::{debug, warn};

use crate::draw;
use crate::params::AtlasParams;
use crate::region::{Atlas, AtlasRegion};

/// Build a packed texture atlas for a panel tree.
///
/// The layout bounding box is letterboxed into the canvas with one
/// uniform scale (`min(availW / dieW, availH / dieH)`), preserving the
/// dieline's proportions; each panel region lands at
/// `(padding + (panelX - minX) * scale, padding + (panelY - minY) * scale)`.
/// Panels with no artwork, or whose raster bytes fail to decode, get a
/// bordered placeholder; the rest of the build is unaffected.
///
/// # Example
///
/// ```
/// use dieline_atlas::{build_atlas, AtlasParams};
/// use dieline_types::{Panel, PanelId, PanelTree, Rect};
///
/// let tree = PanelTree::new(Panel::new(PanelId::new(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0)));
/// let atlas = build_atlas(&tree, &AtlasParams::default());
/// assert_eq!(atlas.len(), 1);
/// assert_eq!(atlas.image.width(), 1024);
/// ```
#[must_use]
pub fn build_atlas(tree: &PanelTree, params: &AtlasParams) -> Atlas {
    let canvas_w = params.width.max(1);
    let canvas_h = params.height.max(1);
    let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, Rgba(params.background));

    let bounds = tree.bounding_rect();
    let scale = letterbox_scale(&bounds, params, canvas_w, canvas_h);

    let pad = f64::from(params.padding);
    let mut regions: HashMap<_, AtlasRegion> = HashMap::with_capacity(tree.len());
    for panel in tree.panels() {
        let x = pad + (panel.bounds.x - bounds.x) * scale;
        let y = pad + (panel.bounds.y - bounds.y) * scale;
        let w = (panel.bounds.width * scale).max(1.0);
        let h = (panel.bounds.height * scale).max(1.0);

        let x = (x.round() as u32).min(canvas_w - 1);
        let y = (y.round() as u32).min(canvas_h - 1);
        let w = (w.round() as u32).max(1).min(canvas_w - x);
        let h = (h.round() as u32).max(1).min(canvas_h - y);

        let region = AtlasRegion {
            x,
            y,
            width: w,
            height: h,
            u0: f64::from(x) / f64::from(canvas_w),
            v0: f64::from(y) / f64::from(canvas_h),
            u1: f64::from(x + w) / f64::from(canvas_w),
            v1: f64::from(y + h) / f64::from(canvas_h),
        };

        draw::draw_panel(&mut canvas, &region, panel);
        regions.insert(panel.id, region);
    }

    debug!(
        panels = regions.len(),
        scale,
        "atlas built"
    );
    Atlas::new(canvas, regions)
}

/// Uniform layout-to-atlas scale, letterboxing the die into the canvas.
fn letterbox_scale(bounds: &Rect, params: &AtlasParams, canvas_w: u32, canvas_h: u32) -> f64 {
    let pad = f64::from(params.padding);
    let avail_w = (f64::from(canvas_w) - 2.0 * pad).max(1.0);
    let avail_h = (f64::from(canvas_h) - 2.0 * pad).max(1.0);
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        warn!("layout bounding box has no area, placing 1px regions");
        return 0.0;
    }
    (avail_w / bounds.width).min(avail_h / bounds.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dieline_types::{Joint, Panel, PanelId, Point2};

    fn id(raw: u32) -> PanelId {
        PanelId::new(raw)
    }

    fn two_panel_tree() -> PanelTree {
        let mut tree = PanelTree::new(Panel::new(
            id(0),
            "base",
            Rect::new(0.0, 0.0, 100.0, 60.0),
        ));
        tree.attach(
            id(0),
            Panel::new(id(1), "left", Rect::new(-50.0, 0.0, 50.0, 60.0)),
            Joint::vertical(Point2::new(0.0, 0.0), 60.0, 2.0),
        )
        .unwrap();
        tree
    }

    #[test]
    fn uv_coordinates_contained_in_unit_square() {
        let atlas = build_atlas(&two_panel_tree(), &AtlasParams::default());
        for region in atlas.regions().values() {
            assert!(0.0 <= region.u0 && region.u0 < region.u1 && region.u1 <= 1.0);
            assert!(0.0 <= region.v0 && region.v0 < region.v1 && region.v1 <= 1.0);
        }
    }

    #[test]
    fn regions_do_not_overlap_beyond_padding() {
        let atlas = build_atlas(&two_panel_tree(), &AtlasParams::default());
        let a = *atlas.region(id(0)).unwrap();
        let b = *atlas.region(id(1)).unwrap();
        // Panels share a vertical edge in the layout; regions may touch
        // but never overlap by more than a pixel of rounding.
        let overlap = (a.x + a.width).min(b.x + b.width) as i64 - a.x.max(b.x) as i64;
        assert!(overlap <= 1);
    }

    #[test]
    fn proportions_preserved_by_uniform_scale() {
        let atlas = build_atlas(&two_panel_tree(), &AtlasParams::default());
        let base = atlas.region(id(0)).unwrap();
        let left = atlas.region(id(1)).unwrap();
        // Base is twice as wide as the left flap in the layout.
        let ratio = f64::from(base.width) / f64::from(left.width);
        assert!((ratio - 2.0).abs() < 0.05);
        // Same height in the layout, same height in the atlas.
        assert!(base.height.abs_diff(left.height) <= 1);
    }

    #[test]
    fn degenerate_layout_still_places_regions() {
        let tree = PanelTree::new(Panel::new(id(0), "dot", Rect::new(5.0, 5.0, 0.0, 0.0)));
        let atlas = build_atlas(&tree, &AtlasParams::default());
        let region = atlas.region(id(0)).unwrap();
        assert_eq!(region.width, 1);
        assert_eq!(region.height, 1);
    }

    #[test]
    fn background_fills_unused_canvas() {
        let params = AtlasParams {
            background: [9, 9, 9, 255],
            ..AtlasParams::default()
        };
        let atlas = build_atlas(&two_panel_tree(), &params);
        // Bottom-right corner lies outside the letterboxed die.
        let px = atlas.image.get_pixel(params.width - 1, params.height - 1);
        assert_eq!(px.0, [9, 9, 9, 255]);
    }
}
