//! Rasterization half of the image merger.
//!
//! Decodes pixel sources concurrently, paints them onto a single
//! canvas following the plan computed by `merge-layout`, and encodes
//! the result as PNG, JPEG, or WebP.

pub mod encode;
pub mod merge;
pub mod render;
pub mod source;

// Re-exports for convenience
pub use encode::suggested_file_name;
pub use merge::{MergedImage, merge};
pub use render::render;
pub use source::{PixelSource, decode_all};

use merge_layout::OptionsError;

/// Errors from one composition attempt.
///
/// Every failure is local to the call that produced it; no state
/// carries over, so retry is simply calling again with the same inputs.
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    /// No images remained after filtering. Callers typically show an
    /// idle/placeholder state rather than an error message.
    #[error("no images to merge")]
    EmptyInput,

    /// A source could not be decoded; the whole composition is aborted
    /// and no partial output is produced.
    #[error("failed to decode image {index}: {source}")]
    DecodeFailure {
        index: usize,
        #[source]
        source: image::ImageError,
    },

    /// A decode worker panicked or was cancelled.
    #[error("decode task failed: {0}")]
    DecodeTask(#[from] tokio::task::JoinError),

    /// The output raster could not be allocated.
    #[error("cannot acquire a {width}x{height} rendering surface")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("failed to encode output: {0}")]
    Encode(#[source] image::ImageError),

    #[error("invalid merge options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// Result type alias for compositor operations.
pub type Result<T> = std::result::Result<T, CompositionError>;
