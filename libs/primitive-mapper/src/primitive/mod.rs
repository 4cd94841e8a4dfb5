//! Primitive construction arguments handed to the rendering layer.
//!
//! Every dimension is fully resolved: a renderer builds the mesh directly
//! from these values without consulting the original text or parameters.

use glam::DVec3;
use prompt_parser::{Color, Shape};
use serde::{Deserialize, Serialize};

/// Geometry of a single primitive with concrete dimensions.
///
/// # Examples
/// ```
/// use primitive_mapper::Geometry;
/// use prompt_parser::Shape;
///
/// let geometry = Geometry::Cone { radius: 1.0, height: 2.5 };
/// assert_eq!(geometry.kind(), Shape::Cone);
/// assert_eq!(geometry.arguments(), vec![1.0, 2.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// A sphere.
    Sphere { radius: f64 },

    /// A cube with equal edges; never a general box.
    Cube { edge: f64 },

    /// A straight cylinder.
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
    },

    /// A ring whose tube thickness is fixed.
    Torus { major_radius: f64, minor_radius: f64 },

    /// A cone with its base on the bottom.
    Cone { radius: f64, height: f64 },
}

impl Geometry {
    /// The shape this geometry instantiates.
    pub fn kind(&self) -> Shape {
        match self {
            Geometry::Sphere { .. } => Shape::Sphere,
            Geometry::Cube { .. } => Shape::Cube,
            Geometry::Cylinder { .. } => Shape::Cylinder,
            Geometry::Torus { .. } => Shape::Torus,
            Geometry::Cone { .. } => Shape::Cone,
        }
    }

    /// Constructor arguments in positional order.
    ///
    /// Sphere: `[radius]`; cube: `[edge]`; cylinder:
    /// `[radius_top, radius_bottom, height]`; torus:
    /// `[major_radius, minor_radius]`; cone: `[radius, height]`.
    pub fn arguments(&self) -> Vec<f64> {
        match *self {
            Geometry::Sphere { radius } => vec![radius],
            Geometry::Cube { edge } => vec![edge],
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => vec![radius_top, radius_bottom, height],
            Geometry::Torus {
                major_radius,
                minor_radius,
            } => vec![major_radius, minor_radius],
            Geometry::Cone { radius, height } => vec![radius, height],
        }
    }

    /// Axis-aligned extent of the geometry centered on its origin.
    ///
    /// Cylinders and cones stand along Y; the torus lies in the XY plane.
    pub fn extent(&self) -> DVec3 {
        match *self {
            Geometry::Sphere { radius } => DVec3::splat(2.0 * radius),
            Geometry::Cube { edge } => DVec3::splat(edge),
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                let diameter = 2.0 * radius_top.max(radius_bottom);
                DVec3::new(diameter, height, diameter)
            }
            Geometry::Torus {
                major_radius,
                minor_radius,
            } => {
                let outer = 2.0 * (major_radius + minor_radius);
                DVec3::new(outer, outer, 2.0 * minor_radius)
            }
            Geometry::Cone { radius, height } => DVec3::new(2.0 * radius, height, 2.0 * radius),
        }
    }
}

/// Everything a renderer needs to place one primitive in a scene.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use primitive_mapper::{Geometry, PrimitiveSpec};
/// use prompt_parser::{Color, Shape};
///
/// let spec = PrimitiveSpec {
///     geometry: Geometry::Cube { edge: 1.0 },
///     color: Color::default(),
///     position: DVec3::ZERO,
/// };
/// assert_eq!(spec.kind(), Shape::Cube);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveSpec {
    /// Resolved geometry.
    pub geometry: Geometry,
    /// Material color.
    pub color: Color,
    /// Placement in scene units.
    pub position: DVec3,
}

impl PrimitiveSpec {
    /// Shape of the primitive.
    pub fn kind(&self) -> Shape {
        self.geometry.kind()
    }
}

#[cfg(test)]
mod tests;
