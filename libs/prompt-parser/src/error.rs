//! # Extraction Errors
//!
//! The extractor has exactly one fatal condition: the text names no shape.
//! Everything else (unknown colors, malformed numbers, missing positions)
//! degrades to defaults.
//!
//! ## Example
//!
//! ```rust
//! use prompt_parser::{extract, ExtractError};
//!
//! let error = extract("something shiny").unwrap_err();
//! assert!(matches!(error, ExtractError::NoShapeDetected { .. }));
//! assert!(error.to_string().contains("sphere"));
//! ```

use thiserror::Error;

use crate::params::Shape;
use crate::vocabulary;

/// Errors raised by [`crate::extract`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// No shape keyword or alias occurs in the input.
    #[error(
        "no shape detected in {input:?}; try one of: {}",
        Shape::ALL.map(Shape::name).join(", ")
    )]
    NoShapeDetected {
        /// The text as the caller supplied it.
        input: String,
    },
}

impl ExtractError {
    /// Creates a [`ExtractError::NoShapeDetected`] for `input`.
    pub fn no_shape(input: &str) -> Self {
        Self::NoShapeDetected {
            input: input.to_string(),
        }
    }

    /// Guidance for the user listing every keyword that would have worked.
    pub fn suggestion(&self) -> String {
        match self {
            Self::NoShapeDetected { .. } => format!(
                "Describe a shape using one of: {}",
                vocabulary::shape_keyword_list()
            ),
        }
    }
}

/// Result type alias for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_lists_canonical_shapes() {
        let msg = ExtractError::no_shape("a shiny thing").to_string();
        assert!(msg.contains("a shiny thing"));
        for shape in Shape::ALL {
            assert!(msg.contains(shape.name()), "missing {shape}");
        }
    }

    #[test]
    fn test_suggestion_lists_aliases() {
        let suggestion = ExtractError::no_shape("").suggestion();
        assert!(suggestion.contains("donut"));
        assert!(suggestion.contains("pyramid"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExtractError>();
    }
}
