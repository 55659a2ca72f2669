//! The composition pipeline: decode, lay out, render, encode.

use image::{DynamicImage, Rgba};
use merge_layout::{
    ImageDimensions, MergeOptions, OptionsError, OutputFormat, color, compute_layout,
};
use tracing::info;

use crate::encode::{encode, suggested_file_name};
use crate::render::render;
use crate::source::{PixelSource, decode_all};
use crate::{CompositionError, Result};

/// The encoded composite plus the metadata a save/display collaborator needs.
#[derive(Debug)]
pub struct MergedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    /// `merged-<N>images-<H|V>-<timestamp>.<ext>`, as a convenience.
    pub file_name: String,
}

impl MergedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Merge the sources into one encoded image.
///
/// Decoding fans out across blocking workers and joins before layout;
/// drawing is strictly sequential in list order. Each call owns its
/// inputs and output raster, so concurrent calls never interfere.
///
/// There is no built-in cancellation or debouncing: a caller reacting
/// to rapid option changes should debounce upstream (~300 ms is
/// typical) and, if it fires a new call while one is in flight, let
/// the stale call finish and discard its result.
pub async fn merge(sources: Vec<PixelSource>, options: &MergeOptions) -> Result<MergedImage> {
    if sources.is_empty() {
        return Err(CompositionError::EmptyInput);
    }
    options.validate()?;
    let background = color::parse_color(&options.background_color)
        .map(Rgba)
        .ok_or_else(|| {
            OptionsError::InvalidBackgroundColor(options.background_color.clone())
        })?;

    let decoded: Vec<DynamicImage> = decode_all(sources)
        .await?
        .into_iter()
        .filter(|img| img.width() > 0 && img.height() > 0)
        .collect();

    let dims: Vec<ImageDimensions> = decoded
        .iter()
        .map(|img| ImageDimensions::new(img.width(), img.height()))
        .collect();
    let plan = compute_layout(&dims, options);
    if plan.is_empty() {
        return Err(CompositionError::EmptyInput);
    }

    let canvas = render(&decoded, &plan, background)?;
    let bytes = encode(&canvas, options.format, options.quality)?;
    let merged = MergedImage {
        width: canvas.width(),
        height: canvas.height(),
        file_name: suggested_file_name(plan.images.len(), options),
        format: options.format,
        bytes,
    };

    info!(
        count = plan.images.len(),
        width = merged.width,
        height = merged.height,
        format = ?merged.format,
        "Composite ready"
    );
    Ok(merged)
}
