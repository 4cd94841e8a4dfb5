//! # Primitive Mapper
//!
//! Turns an extracted [`ParameterRecord`] into the concrete construction
//! arguments of one 3D primitive.
//!
//! ## Mapping
//!
//! | Shape    | Geometry                                            |
//! |----------|-----------------------------------------------------|
//! | sphere   | radius = radius × size                              |
//! | cube     | edge = size                                         |
//! | cylinder | radius_top = radius_bottom = radius, height         |
//! | torus    | major = radius (already scaled), minor = tube const |
//! | cone     | radius = radius × size, height                      |
//!
//! ## Example
//!
//! ```rust
//! use primitive_mapper::{to_primitive, Geometry};
//! use prompt_parser::extract;
//!
//! let record = extract("a large red sphere").unwrap();
//! let spec = to_primitive(&record);
//! assert_eq!(spec.geometry, Geometry::Sphere { radius: 2.0 });
//! ```

pub mod primitive;

pub use primitive::{Geometry, PrimitiveSpec};

use config::constants::{PipelineConfig, TORUS_TUBE_RADIUS};
use prompt_parser::{ParameterRecord, Shape};

/// Maps parameter records to primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    torus_tube_radius: f64,
}

impl Mapper {
    /// Create a mapper using the configured torus tube radius.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            torus_tube_radius: config.torus_tube_radius,
        }
    }

    /// Map one record. Total: every shape has a geometry.
    pub fn map(&self, params: &ParameterRecord) -> PrimitiveSpec {
        let geometry = match params.shape {
            Shape::Sphere => Geometry::Sphere {
                radius: params.radius * params.size,
            },
            Shape::Cube => Geometry::Cube { edge: params.size },
            Shape::Cylinder => Geometry::Cylinder {
                radius_top: params.radius,
                radius_bottom: params.radius,
                height: params.height,
            },
            Shape::Torus => Geometry::Torus {
                major_radius: params.radius,
                minor_radius: self.torus_tube_radius,
            },
            Shape::Cone => Geometry::Cone {
                radius: params.radius * params.size,
                height: params.height,
            },
        };

        PrimitiveSpec {
            geometry,
            color: params.color,
            position: params.position,
        }
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self {
            torus_tube_radius: TORUS_TUBE_RADIUS,
        }
    }
}

/// Map a record with the default configuration.
pub fn to_primitive(params: &ParameterRecord) -> PrimitiveSpec {
    Mapper::default().map(params)
}
