//! # Config Crate
//!
//! Centralized configuration constants for the text-to-primitive pipeline.
//! All default dimensions, qualifier scales, and tunable limits are defined
//! here so the extractor, the mapper, and the WASM surface agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PipelineConfig, DEFAULT_COLOR, DEFAULT_SIZE};
//!
//! let config = PipelineConfig::default();
//! assert_eq!(config.default_color, DEFAULT_COLOR);
//!
//! // Unqualified shapes are built at unit scale
//! assert_eq!(DEFAULT_SIZE, 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Renderer Agnostic**: Dimensions are in scene units, colors in 24-bit RGB

pub mod constants;

#[cfg(test)]
mod tests;
