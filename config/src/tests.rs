//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants and the validated
//! pipeline configuration.

use crate::constants::*;

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_default_dimensions_are_positive() {
    assert!(DEFAULT_SIZE > 0.0);
    assert!(DEFAULT_RADIUS > 0.0);
    assert!(DEFAULT_HEIGHT > 0.0);
    assert!(TORUS_TUBE_RADIUS > 0.0);
}

#[test]
fn test_shape_height_overrides() {
    assert_eq!(CYLINDER_DEFAULT_HEIGHT, 3.0);
    assert_eq!(CONE_DEFAULT_HEIGHT, 2.5);
}

#[test]
fn test_tube_thinner_than_default_radius() {
    // Otherwise a default torus would self-intersect
    assert!(TORUS_TUBE_RADIUS < DEFAULT_RADIUS);
}

// =============================================================================
// QUALIFIER TESTS
// =============================================================================

#[test]
fn test_qualifier_scales_are_ordered() {
    assert!(SMALL_SCALE < MEDIUM_SCALE);
    assert!(MEDIUM_SCALE < LARGE_SCALE);
    assert_eq!(MEDIUM_SCALE, DEFAULT_SIZE);
}

// =============================================================================
// COLOR TESTS
// =============================================================================

#[test]
fn test_default_color_fits_rgb() {
    assert!(DEFAULT_COLOR <= MAX_RGB);
}

// =============================================================================
// PIPELINE CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_uses_constants() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.default_color, DEFAULT_COLOR);
    assert_eq!(cfg.torus_tube_radius, TORUS_TUBE_RADIUS);
    assert_eq!(cfg.max_group_objects, MAX_GROUP_OBJECTS);
    assert_eq!(cfg.status_duration_ms, STATUS_DURATION_MS);
}

#[test]
fn test_new_accepts_valid_values() {
    let cfg = PipelineConfig::new(0x123456, 0.2, 3, 500).expect("valid config");
    assert_eq!(cfg.default_color, 0x123456);
    assert_eq!(cfg.max_group_objects, 3);
}

#[test]
fn test_new_validates_inputs() {
    assert_eq!(
        PipelineConfig::new(0x1_000_000, 0.4, 10, 3000).unwrap_err(),
        ConfigError::InvalidColor(0x1_000_000)
    );
    assert_eq!(
        PipelineConfig::new(DEFAULT_COLOR, 0.0, 10, 3000).unwrap_err(),
        ConfigError::InvalidTubeRadius(0.0)
    );
    assert_eq!(
        PipelineConfig::new(DEFAULT_COLOR, 0.4, 0, 3000).unwrap_err(),
        ConfigError::InvalidGroupLimit(0)
    );
}

#[test]
fn test_new_rejects_nan_tube_radius() {
    assert!(PipelineConfig::new(DEFAULT_COLOR, f64::NAN, 10, 3000).is_err());
}

#[test]
fn test_config_error_display() {
    let msg = ConfigError::InvalidGroupLimit(0).to_string();
    assert!(msg.contains("max_group_objects"));
}
