//! Primitive value tests.

use approx::assert_relative_eq;

use super::*;

#[test]
fn test_kind_for_every_geometry() {
    let geometries = [
        Geometry::Sphere { radius: 1.0 },
        Geometry::Cube { edge: 1.0 },
        Geometry::Cylinder {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 3.0,
        },
        Geometry::Torus {
            major_radius: 1.0,
            minor_radius: 0.4,
        },
        Geometry::Cone {
            radius: 1.0,
            height: 2.5,
        },
    ];
    let kinds: Vec<Shape> = geometries.iter().map(Geometry::kind).collect();
    assert_eq!(kinds, Shape::ALL.to_vec());
}

#[test]
fn test_cylinder_arguments_order() {
    let geometry = Geometry::Cylinder {
        radius_top: 1.0,
        radius_bottom: 2.0,
        height: 3.0,
    };
    assert_eq!(geometry.arguments(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_sphere_extent() {
    let extent = Geometry::Sphere { radius: 1.5 }.extent();
    assert_relative_eq!(extent.x, 3.0);
    assert_relative_eq!(extent.y, 3.0);
    assert_relative_eq!(extent.z, 3.0);
}

#[test]
fn test_torus_extent() {
    let extent = Geometry::Torus {
        major_radius: 2.0,
        minor_radius: 0.4,
    }
    .extent();
    assert_relative_eq!(extent.x, 4.8);
    assert_relative_eq!(extent.z, 0.8);
}

#[test]
fn test_cone_stands_on_y() {
    let extent = Geometry::Cone {
        radius: 1.0,
        height: 2.5,
    }
    .extent();
    assert_relative_eq!(extent.y, 2.5);
    assert_relative_eq!(extent.x, 2.0);
}

#[test]
fn test_geometry_json_is_tagged() {
    let json = serde_json::to_value(Geometry::Cube { edge: 2.0 }).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "cube", "edge": 2.0 }));
}
