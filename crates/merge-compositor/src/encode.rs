//! Output encoding and the suggested download name.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, RgbaImage};
use merge_layout::{MergeOptions, OutputFormat};
use tracing::debug;

use crate::{CompositionError, Result};

/// Encode the finished canvas per the requested format.
///
/// `quality` maps to the JPEG encoder's 1-100 scale; PNG and WebP are
/// lossless (image 0.25 ships a lossless-only WebP encoder) and ignore
/// it. JPEG has no alpha channel, so the canvas is flattened to RGB —
/// safe because the background fill is the bottom layer everywhere.
pub fn encode(canvas: &RgbaImage, format: OutputFormat, quality: f32) -> Result<Vec<u8>> {
    debug!(?format, quality, "Encoding composite");
    let mut bytes = Vec::new();

    match format {
        OutputFormat::Png => canvas
            .write_with_encoder(PngEncoder::new(&mut bytes))
            .map_err(CompositionError::Encode)?,
        OutputFormat::Jpeg => {
            let q = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
            let rgb = DynamicImage::ImageRgba8(canvas.clone()).into_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, q))
                .map_err(CompositionError::Encode)?;
        }
        OutputFormat::Webp => canvas
            .write_with_encoder(WebPEncoder::new_lossless(&mut bytes))
            .map_err(CompositionError::Encode)?,
    }

    Ok(bytes)
}

/// Suggested download name: `merged-<N>images-<H|V>-<timestamp>.<ext>`.
///
/// A convenience string only; nothing is embedded in the encoded buffer.
pub fn suggested_file_name(image_count: usize, options: &MergeOptions) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S");
    format!(
        "merged-{image_count}images-{}-{timestamp}.{}",
        options.direction.tag(),
        options.format.extension(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use merge_layout::Direction;

    fn canvas() -> RgbaImage {
        RgbaImage::from_pixel(31, 17, image::Rgba([200, 100, 50, 255]))
    }

    #[test]
    fn test_png_round_trips() {
        let bytes = encode(&canvas(), OutputFormat::Png, 0.9).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (31, 17));
    }

    #[test]
    fn test_jpeg_applies_quality() {
        let bytes = encode(&canvas(), OutputFormat::Jpeg, 0.9).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (31, 17));
    }

    #[test]
    fn test_webp_is_lossless() {
        let bytes = encode(&canvas(), OutputFormat::Webp, 0.2).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::WebP);
        let back = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(back.get_pixel(0, 0), canvas().get_pixel(0, 0));
    }

    #[test]
    fn test_file_name_pattern() {
        let options = MergeOptions {
            direction: Direction::Vertical,
            format: OutputFormat::Jpeg,
            ..Default::default()
        };
        let name = suggested_file_name(3, &options);
        assert!(name.starts_with("merged-3images-V-"), "got {name}");
        assert!(name.ends_with(".jpeg"), "got {name}");
    }
}
