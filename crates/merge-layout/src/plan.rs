//! The layout calculator: pure geometry from intrinsic sizes and options.
//!
//! Produces per-image target dimensions, placement offsets, and the
//! overall canvas size. No I/O, no pixels; rasterization is the
//! compositor's job and the preview adapter reuses these numbers
//! unchanged so the on-screen arrangement matches the final output.

use tracing::debug;

use crate::options::{Direction, MergeOptions, ResizeMode};

/// Intrinsic pixel dimensions of one input image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Images without both dimensions take no part in the layout.
    fn is_measurable(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One image's target size and top-left offset on the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedImage {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// Computed geometry for one composition request.
///
/// `images` holds one entry per measurable input, in input order.
/// Values stay fractional; rounding to whole pixels happens only when
/// a raster is allocated.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    pub images: Vec<PlacedImage>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl LayoutPlan {
    /// The "nothing to render" plan. Not an error condition.
    pub fn empty() -> Self {
        Self {
            images: Vec::new(),
            canvas_width: 0.0,
            canvas_height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Compute the layout plan for an ordered set of images.
///
/// Pure and deterministic: identical inputs always yield an identical
/// plan. Inputs with a zero dimension are skipped; an all-skipped (or
/// empty) input yields [`LayoutPlan::empty`].
pub fn compute_layout(images: &[ImageDimensions], options: &MergeOptions) -> LayoutPlan {
    let filtered: Vec<ImageDimensions> = images
        .iter()
        .copied()
        .filter(|dims| dims.is_measurable())
        .collect();

    if filtered.is_empty() {
        return LayoutPlan::empty();
    }

    debug!(
        count = filtered.len(),
        direction = ?options.direction,
        resize_mode = ?options.resize_mode,
        "Computing layout"
    );

    // auto-uniform shares one dimension across all images: the minimum on
    // the cross axis, so nothing gets upscaled past native resolution.
    let shared = match options.resize_mode {
        ResizeMode::AutoUniform => {
            let value = match options.direction {
                Direction::Horizontal => filtered.iter().map(|d| d.height).min(),
                Direction::Vertical => filtered.iter().map(|d| d.width).min(),
            };
            value.map(f64::from)
        }
        _ => None,
    };

    let sizes: Vec<(f64, f64)> = filtered
        .iter()
        .map(|dims| target_size(*dims, options, shared))
        .collect();

    let spacing = f64::from(options.spacing);
    let border = f64::from(options.border_width);
    let total_spacing = spacing * (sizes.len() - 1) as f64;

    let (content_width, content_height) = match options.direction {
        Direction::Horizontal => (
            sizes.iter().map(|(w, _)| w).sum::<f64>() + total_spacing,
            sizes.iter().map(|(_, h)| *h).fold(0.0, f64::max),
        ),
        Direction::Vertical => (
            sizes.iter().map(|(w, _)| *w).fold(0.0, f64::max),
            sizes.iter().map(|(_, h)| h).sum::<f64>() + total_spacing,
        ),
    };

    // Walk a cursor from the border corner; images are aligned to the
    // near edge on the cross axis, so shorter/narrower images leave a
    // background-colored gap.
    let mut cursor = border;
    let images = sizes
        .iter()
        .map(|&(width, height)| match options.direction {
            Direction::Horizontal => {
                let placed = PlacedImage {
                    width,
                    height,
                    x: cursor,
                    y: border,
                };
                cursor += width + spacing;
                placed
            }
            Direction::Vertical => {
                let placed = PlacedImage {
                    width,
                    height,
                    x: border,
                    y: cursor,
                };
                cursor += height + spacing;
                placed
            }
        })
        .collect();

    LayoutPlan {
        images,
        canvas_width: content_width + border * 2.0,
        canvas_height: content_height + border * 2.0,
    }
}

/// Target size of one image under the configured resize policy.
///
/// `shared` is the auto-uniform shared dimension, present only in that
/// mode.
fn target_size(dims: ImageDimensions, options: &MergeOptions, shared: Option<f64>) -> (f64, f64) {
    let width = f64::from(dims.width);
    let height = f64::from(dims.height);

    match options.resize_mode {
        ResizeMode::None => (width, height),
        ResizeMode::FitWidth => {
            let target = f64::from(options.uniform_size.width);
            (target, height * target / width)
        }
        ResizeMode::FitHeight => {
            let target = f64::from(options.uniform_size.height);
            (width * target / height, target)
        }
        ResizeMode::Uniform => (
            f64::from(options.uniform_size.width),
            f64::from(options.uniform_size.height),
        ),
        ResizeMode::AutoUniform => {
            let shared = shared.unwrap_or(0.0);
            match options.direction {
                Direction::Horizontal => (width * shared / height, shared),
                Direction::Vertical => (shared, height * shared / width),
            }
        }
    }
}
