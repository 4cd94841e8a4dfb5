//! # Prompt Parser
//!
//! Rule-based extraction of 3D primitive parameters from free-form text.
//!
//! ## Architecture
//!
//! ```text
//! Text → normalize → vocabulary (shape, color) → patterns (size, radius,
//!        height, position) → ParameterRecord
//! ```
//!
//! ## Example
//!
//! ```rust
//! use prompt_parser::{extract, Shape};
//!
//! let record = extract("a large red sphere at 2,0,1").unwrap();
//! assert_eq!(record.shape, Shape::Sphere);
//! assert_eq!(record.size, 2.0);
//! assert_eq!(record.color.hex(), "#ff4444");
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer of the text-to-primitive pipeline:
//!
//! ```text
//! prompt-parser → primitive-mapper → text-cad-pipeline → wasm
//! ```

pub mod error;
pub mod extractor;
pub mod params;
pub mod patterns;
pub mod vocabulary;

// Re-export public API
pub use error::{ExtractError, ExtractResult};
pub use extractor::{normalize, Extractor};
pub use params::{Color, ParameterRecord, Shape};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Extract primitive parameters from free-form text.
///
/// Uses the default pipeline configuration. Build an [`Extractor`] to
/// override the default color.
///
/// ## Errors
///
/// `ExtractError::NoShapeDetected` when the text contains no shape keyword.
///
/// ```rust
/// use prompt_parser::extract;
///
/// assert!(extract("make something nice").is_err());
/// ```
pub fn extract(text: &str) -> ExtractResult<ParameterRecord> {
    Extractor::default().extract(text)
}

// =============================================================================
// TESTS
// =============================================================================
