//! Sequential rasterization of a layout plan.

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use merge_layout::LayoutPlan;
use tracing::debug;

use crate::{CompositionError, Result};

/// Largest canvas the compositor will allocate (pixels, ~268 MB RGBA8).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

/// Paint decoded rasters onto a fresh canvas following the plan.
///
/// `images` must pair one-to-one, in order, with `plan.images`. The
/// whole canvas is flood-filled with `background` first; the border
/// band is that same fill showing through the padding, never a
/// separate stroke. Draws happen strictly in list order since each
/// offset was derived from the images before it.
pub fn render(
    images: &[DynamicImage],
    plan: &LayoutPlan,
    background: Rgba<u8>,
) -> Result<RgbaImage> {
    debug_assert_eq!(images.len(), plan.images.len());

    let width = plan.canvas_width.round() as u32;
    let height = plan.canvas_height.round() as u32;
    if width == 0 || height == 0 || u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
        return Err(CompositionError::SurfaceUnavailable { width, height });
    }

    debug!(width, height, count = images.len(), "Rendering composite");
    let mut canvas = RgbaImage::from_pixel(width, height, background);

    for (img, placed) in images.iter().zip(&plan.images) {
        let target_w = (placed.width.round() as u32).max(1);
        let target_h = (placed.height.round() as u32).max(1);

        if img.width() == target_w && img.height() == target_h {
            imageops::overlay(&mut canvas, img, placed.x.round() as i64, placed.y.round() as i64);
        } else {
            let resized = img.resize_exact(target_w, target_h, FilterType::Lanczos3);
            imageops::overlay(
                &mut canvas,
                &resized,
                placed.x.round() as i64,
                placed.y.round() as i64,
            );
        }
    }

    Ok(canvas)
}
