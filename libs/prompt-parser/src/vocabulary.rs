//! # Vocabulary
//!
//! Fixed alias tables mapping keywords to canonical shapes, colors, and size
//! qualifiers. Tables are ordered: the first entry with a matching alias wins.
//!
//! ## Example
//!
//! ```rust
//! use prompt_parser::vocabulary::detect_shape;
//! use prompt_parser::Shape;
//!
//! assert_eq!(detect_shape("a red ball").map(|(shape, _)| shape), Some(Shape::Sphere));
//! ```

use config::constants::{LARGE_SCALE, MEDIUM_SCALE, SMALL_SCALE};

use crate::params::Shape;

// =============================================================================
// SHAPES
// =============================================================================

/// Shape alias sets in detection priority order.
pub static SHAPE_ALIASES: [(Shape, &[&str]); 5] = [
    (Shape::Sphere, &["sphere", "ball", "globe", "orb", "round"]),
    (Shape::Cube, &["cube", "box", "block", "square"]),
    (Shape::Cylinder, &["cylinder", "tube", "pipe", "column"]),
    (Shape::Torus, &["torus", "donut", "ring"]),
    (Shape::Cone, &["cone", "pyramid", "triangle"]),
];

/// Returns the first shape (in priority order) with an alias contained in `text`,
/// together with the alias that matched.
///
/// `text` is expected to be normalized already.
pub fn detect_shape(text: &str) -> Option<(Shape, &'static str)> {
    SHAPE_ALIASES.iter().find_map(|(shape, aliases)| {
        aliases
            .iter()
            .find(|alias| text.contains(**alias))
            .map(|alias| (*shape, *alias))
    })
}

/// Alias set for one shape.
pub fn shape_aliases(shape: Shape) -> &'static [&'static str] {
    SHAPE_ALIASES
        .iter()
        .find(|(candidate, _)| *candidate == shape)
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}

/// Every shape keyword, grouped by shape, comma separated.
pub fn shape_keyword_list() -> String {
    SHAPE_ALIASES
        .iter()
        .flat_map(|(_, aliases)| aliases.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// COLORS
// =============================================================================

/// A canonical color and the words that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    /// Canonical color word.
    pub name: &'static str,
    /// 24-bit RGB value.
    pub rgb: u32,
    /// Every word that selects this color, canonical word included.
    pub aliases: &'static [&'static str],
}

/// Color alias sets in detection priority order.
pub static COLOR_ALIASES: [ColorEntry; 12] = [
    ColorEntry { name: "red", rgb: 0xff4444, aliases: &["red", "crimson", "scarlet"] },
    ColorEntry { name: "blue", rgb: 0x4444ff, aliases: &["blue", "navy", "azure", "cobalt"] },
    ColorEntry { name: "green", rgb: 0x44ff44, aliases: &["green", "emerald", "lime"] },
    ColorEntry { name: "yellow", rgb: 0xffff44, aliases: &["yellow", "gold"] },
    ColorEntry { name: "purple", rgb: 0xff44ff, aliases: &["purple", "violet", "magenta"] },
    ColorEntry { name: "orange", rgb: 0xff8844, aliases: &["orange", "amber"] },
    ColorEntry { name: "cyan", rgb: 0x44ffff, aliases: &["cyan", "teal", "turquoise", "aqua"] },
    ColorEntry { name: "white", rgb: 0xffffff, aliases: &["white", "ivory"] },
    ColorEntry { name: "black", rgb: 0x222222, aliases: &["black", "ebony"] },
    ColorEntry { name: "pink", rgb: 0xff88cc, aliases: &["pink", "rose"] },
    ColorEntry { name: "brown", rgb: 0x8b4513, aliases: &["brown", "chocolate"] },
    ColorEntry { name: "gray", rgb: 0x888888, aliases: &["gray", "grey", "silver"] },
];

/// Returns the first color entry with an alias contained in `text`, together
/// with the alias that matched.
pub fn detect_color(text: &str) -> Option<(&'static ColorEntry, &'static str)> {
    COLOR_ALIASES.iter().find_map(|entry| {
        entry
            .aliases
            .iter()
            .find(|alias| text.contains(**alias))
            .map(|alias| (entry, *alias))
    })
}

/// Canonical color word for an RGB value.
pub fn color_name(rgb: u32) -> Option<&'static str> {
    COLOR_ALIASES
        .iter()
        .find(|entry| entry.rgb == rgb)
        .map(|entry| entry.name)
}

// =============================================================================
// SIZE QUALIFIERS
// =============================================================================

/// A coarse size word group and the scale it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeQualifier {
    /// Label recorded in the detection trace.
    pub label: &'static str,
    /// Uniform scale factor.
    pub scale: f64,
    /// Whole words that select this qualifier.
    pub words: &'static [&'static str],
}

/// Qualifier groups in detection priority order.
pub static SIZE_QUALIFIERS: [SizeQualifier; 3] = [
    SizeQualifier {
        label: "large",
        scale: LARGE_SCALE,
        words: &["large", "big", "huge", "giant", "massive"],
    },
    SizeQualifier {
        label: "small",
        scale: SMALL_SCALE,
        words: &["small", "tiny", "little", "mini", "micro"],
    },
    SizeQualifier {
        label: "medium",
        scale: MEDIUM_SCALE,
        words: &["medium", "normal", "regular"],
    },
];

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_aliases() {
        for shape in Shape::ALL {
            let aliases = shape_aliases(shape);
            assert!(aliases.contains(&shape.name()), "{shape} missing its own name");
        }
    }

    #[test]
    fn test_shape_table_follows_priority_order() {
        let order: Vec<Shape> = SHAPE_ALIASES.iter().map(|(shape, _)| *shape).collect();
        assert_eq!(order, Shape::ALL.to_vec());
    }

    #[test]
    fn test_detect_shape_reports_alias() {
        assert_eq!(detect_shape("a blue donut"), Some((Shape::Torus, "donut")));
        assert_eq!(detect_shape("nothing here"), None);
    }

    #[test]
    fn test_detect_shape_is_substring_based() {
        // "round" is a sphere alias, even inside another word
        assert_eq!(detect_shape("playground").map(|(s, _)| s), Some(Shape::Sphere));
    }

    #[test]
    fn test_detect_color_aliases_share_value() {
        let (crimson, _) = detect_color("crimson").unwrap();
        let (scarlet, _) = detect_color("scarlet").unwrap();
        assert_eq!(crimson.rgb, scarlet.rgb);
        assert_eq!(crimson.name, "red");
    }

    #[test]
    fn test_detect_color_first_entry_wins() {
        // red is listed before blue
        let (entry, alias) = detect_color("blue and red").unwrap();
        assert_eq!(entry.name, "red");
        assert_eq!(alias, "red");
    }

    #[test]
    fn test_color_name_lookup() {
        assert_eq!(color_name(0x888888), Some("gray"));
        assert_eq!(color_name(0x123456), None);
    }

    #[test]
    fn test_keyword_list_mentions_every_shape() {
        let list = shape_keyword_list();
        for shape in Shape::ALL {
            assert!(list.contains(shape.name()));
        }
    }
}
