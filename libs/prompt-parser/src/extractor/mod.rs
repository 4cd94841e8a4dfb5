//! # Extractor
//!
//! Turns one free-form sentence into a [`ParameterRecord`] through a fixed
//! sequence of independent stages:
//!
//! ```text
//! normalize → shape → color → size qualifier → numeric overrides
//!           → position → shape-specific defaults
//! ```
//!
//! Later stages never revisit earlier ones. Only the shape stage can fail.

use config::constants::{PipelineConfig, CONE_DEFAULT_HEIGHT, CYLINDER_DEFAULT_HEIGHT};

use crate::error::{ExtractError, ExtractResult};
use crate::params::{Color, ParameterRecord, Shape};
use crate::patterns::{self, HEIGHT_RULES, RADIUS_RULES, SIZE_RULES};
use crate::vocabulary;

// =============================================================================
// EXTRACTOR
// =============================================================================

/// Rule-based parameter extractor.
///
/// Holds only configuration; every call to [`Extractor::extract`] is
/// independent.
///
/// ## Example
///
/// ```rust
/// use config::constants::PipelineConfig;
/// use prompt_parser::{Extractor, Shape};
///
/// let extractor = Extractor::new(&PipelineConfig::default());
/// let record = extractor.extract("a tiny green cone").unwrap();
/// assert_eq!(record.shape, Shape::Cone);
/// assert_eq!(record.size, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extractor {
    default_color: Color,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

impl Extractor {
    /// Creates an extractor using the configured default color.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            default_color: Color::new(config.default_color),
        }
    }

    /// Extracts primitive parameters from `text`.
    ///
    /// ## Errors
    ///
    /// [`ExtractError::NoShapeDetected`] when no shape alias occurs in the text.
    pub fn extract(&self, text: &str) -> ExtractResult<ParameterRecord> {
        let normalized = normalize(text);

        let Some((shape, alias)) = vocabulary::detect_shape(&normalized) else {
            tracing::debug!(input = text, "no shape keyword found");
            return Err(ExtractError::no_shape(text));
        };

        let mut record = ParameterRecord::new(shape);
        record.color = self.default_color;
        record.detected_tags.push(format!("shape:{shape}({alias})"));

        detect_color(&normalized, &mut record);
        detect_size(&normalized, &mut record);
        let explicit_height = detect_dimensions(&normalized, &mut record);
        detect_position(&normalized, &mut record);
        apply_shape_defaults(explicit_height, &mut record);

        tracing::debug!(
            shape = %record.shape,
            tags = ?record.detected_tags,
            "extracted primitive parameters"
        );
        Ok(record)
    }
}

/// Lowercases and trims input text; all matching runs on this form.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// =============================================================================
// STAGES
// =============================================================================

fn detect_color(text: &str, record: &mut ParameterRecord) {
    if let Some((entry, alias)) = vocabulary::detect_color(text) {
        record.color = Color::new(entry.rgb);
        record.detected_tags.push(format!("color:{}({alias})", entry.name));
    }
}

/// Qualifier first, then the explicit size rules which override it.
fn detect_size(text: &str, record: &mut ParameterRecord) {
    if let Some(qualifier) = patterns::detect_qualifier(text) {
        record.size = qualifier.scale;
        record.detected_tags.push(format!("size:{}", qualifier.label));
    }
    if let Some((size, rule)) = patterns::first_number(&SIZE_RULES, text) {
        record.size = size;
        record.detected_tags.push(format!("size:{rule}={size}"));
    }
}

/// Returns whether the height was given explicitly.
fn detect_dimensions(text: &str, record: &mut ParameterRecord) -> bool {
    if let Some((radius, rule)) = patterns::first_number(&RADIUS_RULES, text) {
        record.radius = radius;
        record.detected_tags.push(format!("radius:{rule}={radius}"));
    }
    match patterns::first_number(&HEIGHT_RULES, text) {
        Some((height, rule)) => {
            record.height = height;
            record.detected_tags.push(format!("height:{rule}={height}"));
            true
        }
        None => false,
    }
}

fn detect_position(text: &str, record: &mut ParameterRecord) {
    if let Some((position, format)) = patterns::detect_position(text) {
        record.position = position;
        record.detected_tags.push(format!("position:{}", format.tag()));
    }
}

/// Cylinder and cone heights only apply when no height was given; the torus
/// always folds its size into its radius.
fn apply_shape_defaults(explicit_height: bool, record: &mut ParameterRecord) {
    match record.shape {
        Shape::Cylinder if !explicit_height => {
            record.height = CYLINDER_DEFAULT_HEIGHT;
            record.detected_tags.push("height:cylinder-default".to_string());
        }
        Shape::Cone if !explicit_height => {
            record.height = CONE_DEFAULT_HEIGHT;
            record.detected_tags.push("height:cone-default".to_string());
        }
        Shape::Torus => {
            record.radius *= record.size;
            record.detected_tags.push("radius:torus-scaled".to_string());
        }
        _ => {}
    }
}
