//! Opaque pixel sources and concurrent decoding.
//!
//! The compositor never learns where bytes came from; anything that
//! resolves to a raster can participate. Sources are independent, so
//! decoding fans out across blocking workers and joins before layout.

use std::path::PathBuf;

use futures::future;
use image::DynamicImage;
use tracing::debug;

use crate::{CompositionError, Result};

/// One decodable input for a composition request.
#[derive(Debug)]
pub enum PixelSource {
    /// Encoded image bytes already in memory (upload, network fetch).
    Memory(Vec<u8>),
    /// An image file on disk.
    File(PathBuf),
    /// An already-decoded raster, passed through unchanged.
    Raster(DynamicImage),
}

impl PixelSource {
    /// Decode this source to a raster.
    ///
    /// `index` is the source's position in the request, carried into
    /// the error so the caller can tell which input failed.
    async fn decode(self, index: usize) -> Result<DynamicImage> {
        match self {
            PixelSource::Raster(img) => Ok(img),
            PixelSource::Memory(bytes) => decode_bytes(bytes, index).await,
            PixelSource::File(path) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|e| CompositionError::DecodeFailure {
                        index,
                        source: image::ImageError::IoError(e),
                    })?;
                decode_bytes(bytes, index).await
            }
        }
    }
}

/// Decode every source, concurrently, preserving input order.
///
/// All-or-nothing: the first failure aborts the join and surfaces as
/// the result of the whole call, with no partial output.
pub async fn decode_all(sources: Vec<PixelSource>) -> Result<Vec<DynamicImage>> {
    let count = sources.len();
    debug!(count, "Decoding sources");

    let decodes = sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| source.decode(index));
    let decoded = future::try_join_all(decodes).await?;

    debug!(count, "All sources decoded");
    Ok(decoded)
}

/// Format sniffing and pixel decoding are CPU-bound, so they run on a
/// blocking worker rather than the async executor.
async fn decode_bytes(bytes: Vec<u8>, index: usize) -> Result<DynamicImage> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await?
        .map_err(|source| CompositionError::DecodeFailure { index, source })
}
