//! # Configuration Constants
//!
//! Centralized constants for the text-to-primitive pipeline. Default
//! dimensions, qualifier scales, colors, and composition limits are defined
//! here.
//!
//! ## Categories
//!
//! - **Dimensions**: Defaults applied when the text names no measurement
//! - **Qualifiers**: Scale factors for coarse size words
//! - **Limits**: Bounds for multi-object composition
//! - **Presentation**: Status message timing and fallback confidence

use std::fmt;

// =============================================================================
// DIMENSION CONSTANTS
// =============================================================================

/// Uniform scale factor used when the text carries no size information.
pub const DEFAULT_SIZE: f64 = 1.0;

/// Radius used by round shapes when the text gives none.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Height used when the text gives none and the shape has no override.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_HEIGHT, CYLINDER_DEFAULT_HEIGHT};
///
/// assert!(CYLINDER_DEFAULT_HEIGHT > DEFAULT_HEIGHT);
/// ```
pub const DEFAULT_HEIGHT: f64 = 2.0;

/// Height of a cylinder described without an explicit height.
pub const CYLINDER_DEFAULT_HEIGHT: f64 = 3.0;

/// Height of a cone described without an explicit height.
pub const CONE_DEFAULT_HEIGHT: f64 = 2.5;

/// Minor (tube) radius of every torus.
///
/// The text only ever controls the major radius; the tube keeps a fixed
/// thickness.
pub const TORUS_TUBE_RADIUS: f64 = 0.4;

// =============================================================================
// QUALIFIER CONSTANTS
// =============================================================================

/// Scale for "large", "big", "huge", "giant", "massive".
pub const LARGE_SCALE: f64 = 2.0;

/// Scale for "small", "tiny", "little", "mini", "micro".
pub const SMALL_SCALE: f64 = 0.5;

/// Scale for "medium", "normal", "regular".
pub const MEDIUM_SCALE: f64 = 1.0;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Neutral color used when no color word is detected (24-bit RGB).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_COLOR;
///
/// assert_eq!(DEFAULT_COLOR, 0x66_7e_ea);
/// ```
pub const DEFAULT_COLOR: u32 = 0x667eea;

/// Largest value representable as 24-bit RGB.
pub const MAX_RGB: u32 = 0xff_ff_ff;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of copies a single quantity or stack phrase may create.
///
/// "100 cubes" yields this many cubes, not a hundred.
pub const MAX_GROUP_OBJECTS: usize = 10;

/// Distance between neighbouring objects laid out in a row.
pub const GROUP_SPACING: f64 = 2.0;

// =============================================================================
// PRESENTATION CONSTANTS
// =============================================================================

/// Confidence reported for results produced by the local rule-based path.
pub const RULE_BASED_CONFIDENCE: f64 = 0.7;

/// How long a status message stays visible before auto-dismissal.
pub const STATUS_DURATION_MS: u32 = 3000;

// =============================================================================
// PIPELINE CONFIG
// =============================================================================

/// Immutable snapshot of the tunable pipeline settings.
///
/// # Examples
/// ```
/// use config::constants::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert!(config.torus_tube_radius > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Color assigned when the text names none.
    pub default_color: u32,
    /// Fixed minor radius of generated tori.
    pub torus_tube_radius: f64,
    /// Cap on objects produced by one quantity/stack phrase.
    pub max_group_objects: usize,
    /// Display duration handed to the presentation layer.
    pub status_duration_ms: u32,
}

impl PipelineConfig {
    /// Builds a configuration, rejecting values no renderer could use.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PipelineConfig;
    /// let cfg = PipelineConfig::new(0xff0000, 0.25, 4, 1500).expect("valid config");
    /// assert_eq!(cfg.max_group_objects, 4);
    /// ```
    pub fn new(
        default_color: u32,
        torus_tube_radius: f64,
        max_group_objects: usize,
        status_duration_ms: u32,
    ) -> Result<Self, ConfigError> {
        if default_color > MAX_RGB {
            return Err(ConfigError::InvalidColor(default_color));
        }
        if torus_tube_radius.is_nan() || torus_tube_radius <= 0.0 {
            return Err(ConfigError::InvalidTubeRadius(torus_tube_radius));
        }
        if max_group_objects == 0 {
            return Err(ConfigError::InvalidGroupLimit(max_group_objects));
        }
        Ok(Self {
            default_color,
            torus_tube_radius,
            max_group_objects,
            status_duration_ms,
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR,
            torus_tube_radius: TORUS_TUBE_RADIUS,
            max_group_objects: MAX_GROUP_OBJECTS,
            status_duration_ms: STATUS_DURATION_MS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the default color does not fit in 24 bits.
    InvalidColor(u32),
    /// Raised when the torus tube radius is zero, negative, or NaN.
    InvalidTubeRadius(f64),
    /// Raised when the group limit would forbid every object.
    InvalidGroupLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColor(value) => {
                write!(f, "default_color must fit in 24 bits: {value:#x}")
            }
            ConfigError::InvalidTubeRadius(value) => {
                write!(f, "torus_tube_radius must be positive: {value}")
            }
            ConfigError::InvalidGroupLimit(value) => {
                write!(f, "max_group_objects must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
