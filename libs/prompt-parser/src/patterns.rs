//! # Numeric Patterns
//!
//! Compiled regular expressions for size qualifiers, explicit numeric
//! overrides, and positions. Every table is ordered by priority and compiled
//! once on first use.
//!
//! ## Example
//!
//! ```rust
//! use prompt_parser::patterns::{first_number, RADIUS_RULES};
//!
//! let (radius, tag) = first_number(&RADIUS_RULES, "a ball with radius: 2.5").unwrap();
//! assert_eq!(radius, 2.5);
//! assert_eq!(tag, "radius");
//! ```

use std::sync::LazyLock;

use glam::DVec3;
use regex::Regex;

use crate::vocabulary::{SizeQualifier, SIZE_QUALIFIERS};

/// Unsigned decimal: `3`, `2.5`, `.5`.
const NUMBER: &str = r"(\d+(?:\.\d+)?|\.\d+)";

/// Optionally negative decimal, used for coordinates.
const SIGNED: &str = r"(-?(?:\d+(?:\.\d+)?|\.\d+))";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

// =============================================================================
// NUMERIC RULES
// =============================================================================

/// A single numeric override pattern with the tag it records when it fires.
#[derive(Debug)]
pub struct NumericRule {
    /// Rule name recorded in the detection trace.
    pub tag: &'static str,
    regex: Regex,
}

impl NumericRule {
    fn new(tag: &'static str, pattern: &str) -> Self {
        Self {
            tag,
            regex: compile(&pattern.replace("{N}", NUMBER)),
        }
    }

    /// Value captured by this rule in `text`, if it matches and parses.
    pub fn capture(&self, text: &str) -> Option<f64> {
        let captures = self.regex.captures(text)?;
        captures.get(1)?.as_str().parse::<f64>().ok()
    }
}

/// Explicit size rules: `size: 3`, `sized 3`, `3 units`.
pub static SIZE_RULES: LazyLock<Vec<NumericRule>> = LazyLock::new(|| {
    vec![
        NumericRule::new("size", r"\bsize[:\s]+{N}"),
        NumericRule::new("sized", r"\bsized?\s+{N}"),
        NumericRule::new("unit", r"{N}\s*(?:units?|m|cm|meters?)\b"),
    ]
});

/// Explicit radius rules: `radius 2`, `r=2`.
pub static RADIUS_RULES: LazyLock<Vec<NumericRule>> = LazyLock::new(|| {
    vec![
        NumericRule::new("radius", r"\bradius[:\s]+{N}"),
        NumericRule::new("r", r"\br[=:\s]+{N}"),
    ]
});

/// Explicit height rules: `height 4`, `h=4`, `tall 4`.
pub static HEIGHT_RULES: LazyLock<Vec<NumericRule>> = LazyLock::new(|| {
    vec![
        NumericRule::new("height", r"\bheight[:\s]+{N}"),
        NumericRule::new("h", r"\bh[=:\s]+{N}"),
        NumericRule::new("tall", r"\btall\s+{N}"),
    ]
});

/// Tries `rules` in order and returns the first successfully parsed value,
/// with the tag of the rule that produced it.
pub fn first_number(rules: &[NumericRule], text: &str) -> Option<(f64, &'static str)> {
    rules
        .iter()
        .find_map(|rule| rule.capture(text).map(|value| (value, rule.tag)))
}

// =============================================================================
// SIZE QUALIFIERS
// =============================================================================

static QUALIFIER_PATTERNS: LazyLock<Vec<(&'static SizeQualifier, Regex)>> = LazyLock::new(|| {
    SIZE_QUALIFIERS
        .iter()
        .map(|qualifier| {
            let pattern = format!(r"\b(?:{})\b", qualifier.words.join("|"));
            (qualifier, compile(&pattern))
        })
        .collect()
});

/// First qualifier group with a whole-word match in `text`.
///
/// "ball" does not contain the word "all", and "smaller" is not "small".
pub fn detect_qualifier(text: &str) -> Option<&'static SizeQualifier> {
    QUALIFIER_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(qualifier, _)| *qualifier)
}

// =============================================================================
// POSITIONS
// =============================================================================

/// Which position syntax produced a coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFormat {
    /// `at 1, 2, 3` or `position 1 2 3`.
    Inline,
    /// `at (1, 2, 3)`.
    Parenthesized,
    /// Independent `x:1 y:2 z:3` components.
    Axes,
}

impl PositionFormat {
    /// Name recorded in the detection trace.
    pub const fn tag(self) -> &'static str {
        match self {
            PositionFormat::Inline => "inline",
            PositionFormat::Parenthesized => "parenthesized",
            PositionFormat::Axes => "axes",
        }
    }
}

static INLINE_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?:at|position)\s+{SIGNED}[,\s]+{SIGNED}[,\s]+{SIGNED}"
    ))
});

static PARENTHESIZED_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\bat\s*\(\s*{SIGNED}[,\s]+{SIGNED}[,\s]+{SIGNED}\s*\)"
    ))
});

static AXIS_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    ["x", "y", "z"].map(|axis| compile(&format!(r"\b{axis}[:\s=]+{SIGNED}")))
});

fn triple(regex: &Regex, text: &str) -> Option<DVec3> {
    let captures = regex.captures(text)?;
    let mut components = [0.0; 3];
    for (index, component) in components.iter_mut().enumerate() {
        *component = captures.get(index + 1)?.as_str().parse::<f64>().ok()?;
    }
    Some(DVec3::from_array(components))
}

fn axes(text: &str) -> Option<DVec3> {
    let mut components = [0.0; 3];
    let mut found = false;
    for (component, regex) in components.iter_mut().zip(AXIS_PATTERNS.iter()) {
        let value = regex
            .captures(text)
            .and_then(|captures| captures.get(1))
            .and_then(|value| value.as_str().parse::<f64>().ok());
        if let Some(value) = value {
            *component = value;
            found = true;
        }
    }
    found.then(|| DVec3::from_array(components))
}

/// Extracts a position using the first syntax that matches, in the order
/// inline, parenthesized, per-axis.
///
/// Returns `None` when no syntax matches; the caller keeps the origin.
pub fn detect_position(text: &str) -> Option<(DVec3, PositionFormat)> {
    triple(&INLINE_POSITION, text)
        .map(|position| (position, PositionFormat::Inline))
        .or_else(|| {
            triple(&PARENTHESIZED_POSITION, text)
                .map(|position| (position, PositionFormat::Parenthesized))
        })
        .or_else(|| axes(text).map(|position| (position, PositionFormat::Axes)))
}

// =============================================================================
// TESTS
// =============================================================================
