//! The merge options record and its validation.
//!
//! Field and value spellings match the JSON an option-editing UI
//! produces (`camelCase` fields, `kebab-case` enum values).

use serde::{Deserialize, Serialize};

use crate::OptionsError;
use crate::color;

/// Arrangement axis for the composite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Single-letter tag used in suggested file names.
    pub fn tag(self) -> char {
        match self {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        }
    }
}

/// Per-image resize policy applied before arrangement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeMode {
    /// Keep every image at its intrinsic size.
    None,
    /// Pin every image to `uniform_size.width`, aspect-scaling the height.
    FitWidth,
    /// Pin every image to `uniform_size.height`, aspect-scaling the width.
    FitHeight,
    /// Stretch every image to exactly `uniform_size` (aspect not preserved).
    Uniform,
    /// Aspect-scale every image to a shared dimension computed from the
    /// inputs: the minimum height (horizontal) or minimum width (vertical)
    /// among them, so no image is upscaled past its native resolution.
    AutoUniform,
}

/// Output encoding for the composite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
    /// Encoded lossless; the `quality` option does not apply.
    Webp,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Webp => "image/webp",
        }
    }

    /// Whether the `quality` option affects this encoding.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

/// Target box for the `fit-width`, `fit-height`, and `uniform` modes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformSize {
    pub width: u32,
    pub height: u32,
}

/// Configuration for one composition request.
///
/// The engine consumes this record as-is and injects no defaults of its
/// own; [`MergeOptions::default`] mirrors the upstream product defaults
/// as a caller convenience.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOptions {
    pub direction: Direction,
    pub resize_mode: ResizeMode,
    pub uniform_size: UniformSize,
    /// Gap in pixels between adjacent images along the arrangement axis.
    pub spacing: u32,
    /// Uniform padding on all four sides of the final canvas. The border
    /// is the background showing through, not a separate stroke.
    pub border_width: u32,
    /// Hex color string (`#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA`).
    pub background_color: String,
    /// Encoder quality hint in `(0, 1]`, meaningful only for lossy formats.
    pub quality: f32,
    pub format: OutputFormat,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            resize_mode: ResizeMode::AutoUniform,
            uniform_size: UniformSize {
                width: 800,
                height: 600,
            },
            spacing: 0,
            border_width: 0,
            background_color: "#ffffff".to_string(),
            quality: 0.9,
            format: OutputFormat::Png,
        }
    }
}

impl MergeOptions {
    /// Check the record's invariants.
    ///
    /// `uniform_size` must be positive when the resize mode consumes it,
    /// `quality` must be in `(0, 1]`, and `background_color` must parse.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let needs_uniform_size = matches!(
            self.resize_mode,
            ResizeMode::FitWidth | ResizeMode::FitHeight | ResizeMode::Uniform
        );
        if needs_uniform_size && (self.uniform_size.width == 0 || self.uniform_size.height == 0) {
            return Err(OptionsError::NonPositiveUniformSize {
                width: self.uniform_size.width,
                height: self.uniform_size.height,
            });
        }

        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(OptionsError::QualityOutOfRange(self.quality));
        }

        if color::parse_color(&self.background_color).is_none() {
            return Err(OptionsError::InvalidBackgroundColor(
                self.background_color.clone(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MergeOptions::default().validate().is_ok());
    }

    #[test]
    fn test_zero_uniform_size_rejected_when_consumed() {
        let options = MergeOptions {
            resize_mode: ResizeMode::Uniform,
            uniform_size: UniformSize {
                width: 0,
                height: 300,
            },
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::NonPositiveUniformSize { .. })
        ));
    }

    #[test]
    fn test_zero_uniform_size_ignored_when_unused() {
        // auto-uniform never reads uniform_size
        let options = MergeOptions {
            resize_mode: ResizeMode::AutoUniform,
            uniform_size: UniformSize {
                width: 0,
                height: 0,
            },
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_quality_bounds() {
        let mut options = MergeOptions::default();

        options.quality = 0.0;
        assert!(matches!(
            options.validate(),
            Err(OptionsError::QualityOutOfRange(_))
        ));

        options.quality = 1.0;
        assert!(options.validate().is_ok());

        options.quality = 1.5;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_bad_background_color_rejected() {
        let options = MergeOptions {
            background_color: "not-a-color".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::InvalidBackgroundColor(_))
        ));
    }

    #[test]
    fn test_serde_uses_ui_field_spellings() {
        let options = MergeOptions {
            resize_mode: ResizeMode::AutoUniform,
            format: OutputFormat::Jpeg,
            ..Default::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["resizeMode"], "auto-uniform");
        assert_eq!(json["direction"], "horizontal");
        assert_eq!(json["format"], "jpeg");
        assert_eq!(json["uniformSize"]["width"], 800);
        assert_eq!(json["borderWidth"], 0);

        let back: MergeOptions = serde_json::from_value(json).unwrap();
        assert_eq!(back, options);
    }
}
