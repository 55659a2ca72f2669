//! Shrink-to-fit projection of a layout plan for on-screen previews.
//!
//! Reuses [`compute_layout`] verbatim so the preview never drifts from
//! the compositor's geometry; only a display scale is applied on top.
//! Re-rasterizing is never involved.

use tracing::debug;

use crate::options::MergeOptions;
use crate::plan::{ImageDimensions, LayoutPlan, PlacedImage, compute_layout};

/// Tallest a preview is allowed to render, in CSS pixels.
pub const MAX_PREVIEW_HEIGHT: f64 = 400.0;

/// A layout plan projected through a display scale.
///
/// All values are pre-scaled so a display collaborator can position
/// absolute boxes directly; `scale` is retained so it can report
/// full-resolution numbers (e.g. "expected output size") by dividing
/// back out.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewLayout {
    pub images: Vec<PlacedImage>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub scale: f64,
    pub spacing: f64,
    pub border_width: f64,
}

impl PreviewLayout {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Project the layout for display inside `container_width`.
///
/// The scale never exceeds 1 (previews shrink, never enlarge) and caps
/// the rendered height at [`MAX_PREVIEW_HEIGHT`]. Call again whenever
/// the images, options, or container width change; like the calculator
/// it is pure and cheap.
pub fn preview_layout(
    images: &[ImageDimensions],
    options: &MergeOptions,
    container_width: f64,
) -> PreviewLayout {
    let plan = compute_layout(images, options);
    if plan.is_empty() {
        return PreviewLayout {
            images: Vec::new(),
            canvas_width: 0.0,
            canvas_height: 0.0,
            scale: 1.0,
            spacing: 0.0,
            border_width: 0.0,
        };
    }

    let scale = (container_width / plan.canvas_width)
        .min(MAX_PREVIEW_HEIGHT / plan.canvas_height)
        .min(1.0);

    debug!(
        scale,
        canvas_width = plan.canvas_width,
        canvas_height = plan.canvas_height,
        "Scaling layout for preview"
    );

    scaled(plan, options, scale)
}

fn scaled(plan: LayoutPlan, options: &MergeOptions, scale: f64) -> PreviewLayout {
    PreviewLayout {
        images: plan
            .images
            .iter()
            .map(|p| PlacedImage {
                width: p.width * scale,
                height: p.height * scale,
                x: p.x * scale,
                y: p.y * scale,
            })
            .collect(),
        canvas_width: plan.canvas_width * scale,
        canvas_height: plan.canvas_height * scale,
        scale,
        spacing: f64::from(options.spacing) * scale,
        border_width: f64::from(options.border_width) * scale,
    }
}
