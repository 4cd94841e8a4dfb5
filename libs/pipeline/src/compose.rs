//! # Multi-Object Composition
//!
//! Splits a sentence that describes several objects into one
//! [`ParameterRecord`] per object and lays them out in the scene.
//!
//! ## Layouts
//!
//! ```text
//! "a sphere and a cube"   → each part at (2i, 0, 0)
//! "stack 3 cubes"         → copies stacked along y
//! "3 cubes"               → copy i at (2i - count, 0, 0)
//! "a house"               → named composite with fixed part placement
//! ```
//!
//! Layouts are tried in the order listed; a stack phrase always contains a
//! quantity, so it is checked first. A layout that yields no shaped object
//! gives way to the next one.
//! Sentences without a multi-object indicator go through the single-object
//! extractor unchanged.

use std::sync::LazyLock;

use config::constants::{PipelineConfig, GROUP_SPACING, MAX_GROUP_OBJECTS};
use glam::DVec3;
use prompt_parser::{normalize, ExtractResult, Extractor, ParameterRecord};
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

static MULTI_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+\s+(?:spheres|cubes|cylinders|cones)",
        r"and\s+(?:a|an)\b",
        r"with\s+(?:a|an|\d+)",
        r"stack",
        r"multiple",
        r"several",
        r"above",
        r"below",
        r"next to",
        r"on top",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

static QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d+)\s+(sphere|cube|cylinder|cone|torus|ball|box|tube)s?"));

static STACK: LazyLock<Regex> = LazyLock::new(|| compile(r"stack\s+(\d+)\s+(.+)"));

// =============================================================================
// COMPOSITES
// =============================================================================

/// One piece of a named composite object.
#[derive(Debug, Clone, Copy)]
pub struct CompositePart {
    /// Text handed to the extractor for this piece.
    pub text: &'static str,
    /// Fixed placement.
    pub position: [f64; 3],
    /// Multiplier applied to both size and radius.
    pub scale: f64,
}

/// A named object built from several primitives.
#[derive(Debug, Clone, Copy)]
pub struct Composite {
    /// Word that selects the composite when it appears in the text.
    pub name: &'static str,
    /// Pieces in creation order.
    pub parts: &'static [CompositePart],
}

/// Known composites, checked in order.
pub static COMPOSITES: [Composite; 3] = [
    Composite {
        name: "house",
        parts: &[
            CompositePart { text: "cube walls", position: [0.0, 0.0, 0.0], scale: 3.0 },
            CompositePart { text: "cone roof", position: [0.0, 2.0, 0.0], scale: 1.5 },
        ],
    },
    Composite {
        name: "table",
        parts: &[
            CompositePart { text: "cube top", position: [0.0, 2.0, 0.0], scale: 1.0 },
            CompositePart { text: "cylinder leg", position: [-1.5, 0.0, -1.5], scale: 0.3 },
            CompositePart { text: "cylinder leg", position: [1.5, 0.0, -1.5], scale: 0.3 },
            CompositePart { text: "cylinder leg", position: [-1.5, 0.0, 1.5], scale: 0.3 },
            CompositePart { text: "cylinder leg", position: [1.5, 0.0, 1.5], scale: 0.3 },
        ],
    },
    Composite {
        name: "snowman",
        parts: &[
            CompositePart { text: "large sphere", position: [0.0, 0.0, 0.0], scale: 2.0 },
            CompositePart { text: "sphere", position: [0.0, 2.5, 0.0], scale: 1.5 },
            CompositePart { text: "small sphere", position: [0.0, 4.2, 0.0], scale: 1.0 },
        ],
    },
];

// =============================================================================
// COMPOSER
// =============================================================================

/// Splits multi-object sentences into records.
///
/// ## Example
///
/// ```rust
/// use text_cad_pipeline::Composer;
///
/// let records = Composer::default().compose("a red sphere and a blue cube").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].position.x, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Composer {
    extractor: Extractor,
    max_objects: usize,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            extractor: Extractor::default(),
            max_objects: MAX_GROUP_OBJECTS,
        }
    }
}

impl Composer {
    /// Create a composer honoring the configured default color and group cap.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            extractor: Extractor::new(config),
            max_objects: config.max_group_objects,
        }
    }

    /// Whether the text reads like a description of more than one object.
    pub fn is_multi_object(text: &str) -> bool {
        let text = normalize(text);
        MULTI_INDICATORS.iter().any(|regex| regex.is_match(&text))
    }

    /// Produce one record per described object.
    ///
    /// ## Errors
    ///
    /// `NoShapeDetected` when no object in the text names a shape.
    pub fn compose(&self, text: &str) -> ExtractResult<Vec<ParameterRecord>> {
        let normalized = normalize(text);
        if !Self::is_multi_object(&normalized) {
            return Ok(vec![self.extractor.extract(text)?]);
        }

        let layout = self
            .split_on_and(&normalized)
            .or_else(|| self.stack(&normalized))
            .or_else(|| self.quantity(&normalized))
            .or_else(|| self.composite(&normalized));

        match layout {
            Some(records) => {
                tracing::debug!(count = records.len(), "composed multi-object text");
                Ok(records)
            }
            None => Ok(vec![self.extractor.extract(text)?]),
        }
    }

    /// Extract one part, logging and dropping it when it names no shape.
    fn part(&self, text: &str) -> Option<ParameterRecord> {
        match self.extractor.extract(text) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(part = text, error = %err, "skipping part without a shape");
                None
            }
        }
    }

    fn split_on_and(&self, text: &str) -> Option<Vec<ParameterRecord>> {
        if !text.contains(" and ") {
            return None;
        }
        let records = text
            .split(" and ")
            .enumerate()
            .filter_map(|(i, part)| {
                let mut record = self.part(part.trim())?;
                record.position = DVec3::new(GROUP_SPACING * i as f64, 0.0, 0.0);
                record.detected_tags.push(format!("layout:and[{i}]"));
                Some(record)
            })
            .collect();
        non_empty(records)
    }

    fn quantity(&self, text: &str) -> Option<Vec<ParameterRecord>> {
        let caps = QUANTITY.captures(text)?;
        let count = caps[1].parse::<usize>().ok().filter(|count| *count > 0)?;
        let template = self.part(caps.get(2)?.as_str())?;
        let start = -(count as f64);

        let records = (0..count.min(self.max_objects))
            .map(|i| {
                let mut record = template.clone();
                record.position = DVec3::new(GROUP_SPACING * i as f64 + start, 0.0, 0.0);
                record.detected_tags.push(format!("layout:quantity[{i}]"));
                record
            })
            .collect();
        Some(records)
    }

    fn composite(&self, text: &str) -> Option<Vec<ParameterRecord>> {
        let composite = COMPOSITES.iter().find(|c| text.contains(c.name))?;
        let records = composite
            .parts
            .iter()
            .filter_map(|part| {
                let mut record = self.part(part.text)?;
                record.position = DVec3::from_array(part.position);
                record.size *= part.scale;
                record.radius *= part.scale;
                record
                    .detected_tags
                    .push(format!("layout:composite({})", composite.name));
                Some(record)
            })
            .collect();
        non_empty(records)
    }

    fn stack(&self, text: &str) -> Option<Vec<ParameterRecord>> {
        let caps = STACK.captures(text)?;
        let count = caps[1].parse::<usize>().ok().filter(|count| *count > 0)?;
        // the rest of the phrase carries the shape and any color or size
        let template = self.part(caps.get(2)?.as_str().trim())?;

        let mut records = Vec::with_capacity(count.min(self.max_objects));
        let mut y = 0.0;
        for i in 0..count.min(self.max_objects) {
            let mut record = template.clone();
            record.position = DVec3::new(0.0, y, 0.0);
            record.detected_tags.push(format!("layout:stack[{i}]"));
            y += GROUP_SPACING * record.size;
            records.push(record);
        }
        Some(records)
    }
}

fn non_empty(records: Vec<ParameterRecord>) -> Option<Vec<ParameterRecord>> {
    (!records.is_empty()).then_some(records)
}

/// Compose with the default configuration.
pub fn compose(text: &str) -> ExtractResult<Vec<ParameterRecord>> {
    Composer::default().compose(text)
}
