//! # Parameter Record
//!
//! The structured description produced by the extractor: one shape, its
//! color, its dimensions, and where it sits in the scene.

use std::fmt;

use config::constants::{DEFAULT_COLOR, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SIZE, MAX_RGB};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::vocabulary;

// =============================================================================
// SHAPE
// =============================================================================

/// Canonical primitive kinds understood by the pipeline.
///
/// Deserializing an unknown name yields [`Shape::Sphere`], so a record built
/// outside the extractor can always be rendered.
///
/// ## Example
///
/// ```rust
/// use prompt_parser::Shape;
///
/// assert_eq!(Shape::from_name("Torus"), Some(Shape::Torus));
/// assert_eq!(Shape::Cone.name(), "cone");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Shape {
    Sphere,
    Cube,
    Cylinder,
    Torus,
    Cone,
}

impl Shape {
    /// Every shape, in detection priority order.
    pub const ALL: [Shape; 5] = [
        Shape::Sphere,
        Shape::Cube,
        Shape::Cylinder,
        Shape::Torus,
        Shape::Cone,
    ];

    /// Lowercase canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Sphere => "sphere",
            Shape::Cube => "cube",
            Shape::Cylinder => "cylinder",
            Shape::Torus => "torus",
            Shape::Cone => "cone",
        }
    }

    /// Looks up a shape by its canonical name (case-insensitive).
    ///
    /// Aliases such as "ball" are not accepted here; they belong to text
    /// extraction, not to structured data.
    pub fn from_name(name: &str) -> Option<Shape> {
        let name = name.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(name))
    }

    /// Alias keywords that select this shape during extraction.
    pub fn keywords(self) -> &'static [&'static str] {
        vocabulary::shape_aliases(self)
    }
}

impl From<String> for Shape {
    fn from(value: String) -> Self {
        Shape::from_name(&value).unwrap_or_else(|| {
            tracing::debug!(shape = %value, "unrecognized shape name, using sphere");
            Shape::Sphere
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// COLOR
// =============================================================================

/// 24-bit RGB color.
///
/// ## Example
///
/// ```rust
/// use prompt_parser::Color;
///
/// let red = Color::new(0xff4444);
/// assert_eq!(red.hex(), "#ff4444");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// Creates a color, discarding any bits above the 24-bit range.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & MAX_RGB)
    }

    /// Raw `0xRRGGBB` value.
    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// CSS-style `#rrggbb` string.
    pub fn hex(self) -> String {
        format!("#{:06x}", self.0)
    }

    /// Normalized RGBA components for renderers, fully opaque.
    pub fn to_rgba(self) -> [f32; 4] {
        let channel = |shift: u32| ((self.0 >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0), 1.0]
    }

    /// Canonical color word for this value, if it is one of the vocabulary colors.
    pub fn name(self) -> Option<&'static str> {
        vocabulary::color_name(self.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

// =============================================================================
// PARAMETER RECORD
// =============================================================================

/// Fully resolved parameters for one primitive.
///
/// Built fresh by every extraction and only read afterwards.
///
/// ## Example
///
/// ```rust
/// use prompt_parser::{ParameterRecord, Shape};
///
/// let record = ParameterRecord::new(Shape::Cube);
/// assert_eq!(record.size, 1.0);
/// assert!(record.detected_tags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Primitive kind.
    pub shape: Shape,
    /// Surface color.
    #[serde(default)]
    pub color: Color,
    /// Uniform scale factor.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Radius for round shapes (major radius for a torus).
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Height for cylinders and cones.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Placement in scene units.
    #[serde(default)]
    pub position: DVec3,
    /// Which extraction rules fired, in firing order. Diagnostic only.
    #[serde(default)]
    pub detected_tags: Vec<String>,
}

fn default_size() -> f64 {
    DEFAULT_SIZE
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

impl ParameterRecord {
    /// Record for `shape` with every other field at its default.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            color: Color::default(),
            size: DEFAULT_SIZE,
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            position: DVec3::ZERO,
            detected_tags: Vec::new(),
        }
    }

    /// Short human-readable summary such as `"large red sphere"`.
    pub fn describe(&self) -> String {
        let mut words = Vec::with_capacity(3);
        if self.size > DEFAULT_SIZE {
            words.push("large");
        } else if self.size < DEFAULT_SIZE {
            words.push("small");
        }
        if let Some(color) = self.color.name() {
            words.push(color);
        }
        words.push(self.shape.name());
        words.join(" ")
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_names_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_name(shape.name()), Some(shape));
        }
        assert_eq!(Shape::from_name(" CUBE "), Some(Shape::Cube));
        assert_eq!(Shape::from_name("ball"), None);
    }

    #[test]
    fn test_unknown_shape_deserializes_as_sphere() {
        let shape: Shape = serde_json::from_str("\"hexagon\"").unwrap();
        assert_eq!(shape, Shape::Sphere);

        let shape: Shape = serde_json::from_str("\"cylinder\"").unwrap();
        assert_eq!(shape, Shape::Cylinder);
    }

    #[test]
    fn test_shape_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Shape::Torus).unwrap(), "\"torus\"");
    }

    #[test]
    fn test_color_masks_to_24_bits() {
        assert_eq!(Color::new(0xff_12_34_56).rgb(), 0x12_34_56);
    }

    #[test]
    fn test_color_rgba() {
        let rgba = Color::new(0xff0000).to_rgba();
        assert_eq!(rgba, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_record() {
        let record = ParameterRecord::new(Shape::Sphere);
        assert_eq!(record.color, Color::new(DEFAULT_COLOR));
        assert_eq!(record.radius, DEFAULT_RADIUS);
        assert_eq!(record.height, DEFAULT_HEIGHT);
        assert_eq!(record.position, DVec3::ZERO);
    }

    #[test]
    fn test_describe() {
        let mut record = ParameterRecord::new(Shape::Sphere);
        assert_eq!(record.describe(), "sphere");

        record.size = 2.0;
        record.color = Color::new(0xff4444);
        assert_eq!(record.describe(), "large red sphere");

        record.size = 0.5;
        record.color = Color::new(0x010203);
        assert_eq!(record.describe(), "small sphere");
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: ParameterRecord = serde_json::from_str(r#"{"shape":"cone"}"#).unwrap();
        assert_eq!(record, ParameterRecord::new(Shape::Cone));
    }
}
