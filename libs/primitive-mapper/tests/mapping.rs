use approx::assert_relative_eq;
use glam::DVec3;
use primitive_mapper::{to_primitive, Geometry};
use prompt_parser::{extract, Color, ParameterRecord, Shape};

#[test]
fn large_red_sphere_end_to_end() {
    let spec = to_primitive(&extract("a large red sphere").unwrap());
    assert_eq!(spec.geometry, Geometry::Sphere { radius: 2.0 });
    assert_eq!(spec.color, Color::new(0xff4444));
    assert_eq!(spec.position, DVec3::ZERO);
}

#[test]
fn torus_major_radius_is_radius_times_size() {
    let spec = to_primitive(&extract("a torus with radius 2, size 3").unwrap());
    match spec.geometry {
        Geometry::Torus { major_radius, .. } => assert_relative_eq!(major_radius, 6.0),
        other => panic!("expected torus, got {other:?}"),
    }
}

#[test]
fn small_cone_uses_default_height() {
    let spec = to_primitive(&extract("a small green pyramid").unwrap());
    assert_eq!(
        spec.geometry,
        Geometry::Cone {
            radius: 0.5,
            height: 2.5,
        }
    );
}

#[test]
fn cylinder_placed_by_axes() {
    let spec = to_primitive(&extract("a tube radius 0.5 x:3 z:-2").unwrap());
    assert_eq!(spec.kind(), Shape::Cylinder);
    assert_eq!(spec.position, DVec3::new(3.0, 0.0, -2.0));
    assert_eq!(spec.geometry.arguments(), vec![0.5, 0.5, 3.0]);
}

#[test]
fn unknown_shape_record_maps_to_sphere() {
    let record: ParameterRecord =
        serde_json::from_str(r#"{"shape":"dodecahedron","size":2.0}"#).unwrap();
    let spec = to_primitive(&record);
    assert_eq!(spec.geometry, Geometry::Sphere { radius: 2.0 });
}

#[test]
fn mapping_is_deterministic() {
    let record = extract("a big blue box at (1, 2, 3)").unwrap();
    assert_eq!(to_primitive(&record), to_primitive(&record));
}

#[test]
fn spec_serializes_for_renderers() {
    let spec = to_primitive(&extract("a blue cube at 1, 2, 3").unwrap());
    let json = serde_json::to_value(spec).unwrap();
    assert_eq!(json["geometry"]["kind"], "cube");
    assert_eq!(json["color"], 0x4444ff);
    assert_eq!(json["position"], serde_json::json!([1.0, 2.0, 3.0]));
}
