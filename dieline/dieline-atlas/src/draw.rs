//! Per-panel drawing into the atlas canvas.

// Pixel coordinates fit comfortably in the lossy casts below.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use dieline_types::{Panel, PanelImage, Point2};
use image::{imageops, Rgba, RgbaImage};
use tracing::warn;

use crate::region::AtlasRegion;

/// Placeholder fill for missing or undecodable artwork.
const PLACEHOLDER_FILL: Rgba<u8> = Rgba([186, 74, 186, 255]);
const PLACEHOLDER_BORDER: Rgba<u8> = Rgba([70, 20, 70, 255]);

/// Fill used for vector outlines (no raster artwork to sample).
const OUTLINE_FILL: Rgba<u8> = Rgba([214, 214, 214, 255]);
const OUTLINE_BORDER: Rgba<u8> = Rgba([96, 96, 96, 255]);

/// Draw one panel's artwork into its atlas region.
pub(crate) fn draw_panel(canvas: &mut RgbaImage, region: &AtlasRegion, panel: &Panel) {
    match &panel.image {
        Some(PanelImage::Raster(bytes)) => draw_raster(canvas, region, panel, bytes),
        Some(PanelImage::Outline(points)) => fill_outline(canvas, region, points),
        None => draw_placeholder(canvas, region),
    }
}

fn draw_raster(canvas: &mut RgbaImage, region: &AtlasRegion, panel: &Panel, bytes: &[u8]) {
    match image::load_from_memory(bytes) {
        Ok(decoded) => {
            let resized = imageops::resize(
                &decoded.to_rgba8(),
                region.width,
                region.height,
                imageops::FilterType::Triangle,
            );
            imageops::replace(canvas, &resized, i64::from(region.x), i64::from(region.y));
        }
        Err(error) => {
            warn!(panel = %panel.id, %error, "panel image failed to decode, drawing placeholder");
            draw_placeholder(canvas, region);
        }
    }
}

/// Scanline-fill a closed outline, normalized into the region.
fn fill_outline(canvas: &mut RgbaImage, region: &AtlasRegion, points: &[Point2<f64>]) {
    if points.len() < 3 {
        draw_placeholder(canvas, region);
        return;
    }

    // Normalize the outline into region pixel space.
    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);

    let px: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            (
                f64::from(region.x) + (p.x - min_x) / span_x * f64::from(region.width),
                f64::from(region.y) + (p.y - min_y) / span_y * f64::from(region.height),
            )
        })
        .collect();

    // Even-odd crossing fill, one scanline per region row.
    let mut crossings: Vec<f64> = Vec::with_capacity(px.len());
    for row in region.y..region.y + region.height {
        let scan_y = f64::from(row) + 0.5;
        crossings.clear();
        for i in 0..px.len() {
            let (x0, y0) = px[i];
            let (x1, y1) = px[(i + 1) % px.len()];
            if (y0 <= scan_y) != (y1 <= scan_y) {
                crossings.push(x0 + (scan_y - y0) / (y1 - y0) * (x1 - x0));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            let start = pair[0].round().max(f64::from(region.x)) as u32;
            let end = pair[1]
                .round()
                .min(f64::from(region.x + region.width)) as u32;
            for col in start..end {
                put_pixel_checked(canvas, col, row, OUTLINE_FILL);
            }
        }
    }
    draw_border(canvas, region, OUTLINE_BORDER);
}

fn draw_placeholder(canvas: &mut RgbaImage, region: &AtlasRegion) {
    for row in region.y..region.y + region.height {
        for col in region.x..region.x + region.width {
            put_pixel_checked(canvas, col, row, PLACEHOLDER_FILL);
        }
    }
    draw_border(canvas, region, PLACEHOLDER_BORDER);
}

fn draw_border(canvas: &mut RgbaImage, region: &AtlasRegion, color: Rgba<u8>) {
    let right = region.x + region.width - 1;
    let bottom = region.y + region.height - 1;
    for col in region.x..=right {
        put_pixel_checked(canvas, col, region.y, color);
        put_pixel_checked(canvas, col, bottom, color);
    }
    for row in region.y..=bottom {
        put_pixel_checked(canvas, region.x, row, color);
        put_pixel_checked(canvas, right, row, color);
    }
}

#[inline]
fn put_pixel_checked(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, color);
    }
}
