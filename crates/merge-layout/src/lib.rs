//! Geometry engine for merging images into a single composite.
//!
//! Pure layout computation: per-image target sizes, canvas dimensions,
//! and placement offsets for a horizontal or vertical arrangement, plus
//! a shrink-to-fit projection for on-screen previews. Rasterization
//! lives in the `merge-compositor` crate and consumes the plans
//! produced here.

pub mod color;
pub mod options;
pub mod plan;
pub mod preview;

// Re-exports for convenience
pub use options::{Direction, MergeOptions, OutputFormat, ResizeMode, UniformSize};
pub use plan::{ImageDimensions, LayoutPlan, PlacedImage, compute_layout};
pub use preview::{MAX_PREVIEW_HEIGHT, PreviewLayout, preview_layout};

/// Errors from validating a [`MergeOptions`] record.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("uniform size must be positive, got {width}x{height}")]
    NonPositiveUniformSize { width: u32, height: u32 },

    #[error("quality must be in (0, 1], got {0}")]
    QualityOutOfRange(f32),

    #[error("unrecognized background color: {0:?}")]
    InvalidBackgroundColor(String),
}
