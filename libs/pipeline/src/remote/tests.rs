//! Remote reply decoding tests.

use approx::assert_relative_eq;

use super::*;

const REPLY: &str = r#"{
    "objects": [
        {"shape": "sphere", "size": 2.0, "radius": 2.0, "height": 2.0, "color": 16729156,
         "position": {"x": 0, "y": 0, "z": 0}, "confidence": 0.9},
        {"shape": "cube", "size": 1.0, "radius": 1.0, "height": 2.0, "color": 6717162,
         "position": {"x": 2, "y": 0, "z": 0}, "confidence": 0.7}
    ],
    "count": 2,
    "interpretation": "Generated 2 object(s)",
    "ml_powered": true
}"#;

#[test]
fn test_decodes_success_reply() {
    let response = RemoteResponse::from_body(200, REPLY).unwrap();
    assert_eq!(response.count, 2);
    assert!(response.ml_powered);
    assert_eq!(response.interpretation, "Generated 2 object(s)");
    assert_eq!(response.objects[1].position.x, 2.0);
}

#[test]
fn test_records_carry_model_tag() {
    let records = RemoteResponse::from_body(200, REPLY).unwrap().records();
    assert_eq!(records[0].shape, Shape::Sphere);
    assert_eq!(records[0].color, Color::new(0xff4444));
    assert_eq!(records[1].position, DVec3::new(2.0, 0.0, 0.0));
    assert_eq!(records[1].detected_tags, vec!["source:model".to_string()]);
}

#[test]
fn test_mean_confidence() {
    let response = RemoteResponse::from_body(200, REPLY).unwrap();
    assert_relative_eq!(response.confidence().unwrap(), 0.8, epsilon = 1e-12);
}

#[test]
fn test_missing_confidence() {
    let response = RemoteResponse::from_body(200, r#"{"objects":[{"shape":"cone"}]}"#).unwrap();
    assert_eq!(response.confidence(), None);
}

#[test]
fn test_unknown_shape_becomes_sphere() {
    let response =
        RemoteResponse::from_body(200, r#"{"objects":[{"shape":"teapot"}]}"#).unwrap();
    assert_eq!(response.records()[0].shape, Shape::Sphere);
}

#[test]
fn test_missing_fields_use_defaults() {
    let response = RemoteResponse::from_body(200, r#"{"objects":[{"shape":"torus"}]}"#).unwrap();
    let record = response.objects[0].to_record();
    assert_eq!(record.size, DEFAULT_SIZE);
    assert_eq!(record.radius, DEFAULT_RADIUS);
    assert_eq!(record.color, Color::default());
    assert_eq!(record.position, DVec3::ZERO);
    assert!(!response.ml_powered);
}

#[test]
fn test_remote_torus_is_not_rescaled() {
    let body = r#"{"objects":[{"shape":"torus","size":3.0,"radius":2.0}]}"#;
    let record = RemoteResponse::from_body(200, body).unwrap().records().remove(0);
    assert_eq!(record.radius, 2.0);
}

#[test]
fn test_error_payload_with_failure_status() {
    let err = RemoteResponse::from_body(400, r#"{"error": "No text provided"}"#).unwrap_err();
    assert!(matches!(err, RemoteError::Service(ref msg) if msg == "No text provided"));
}

#[test]
fn test_error_payload_with_success_status() {
    let err = RemoteResponse::from_body(200, r#"{"error": "model not loaded"}"#).unwrap_err();
    assert!(matches!(err, RemoteError::Service(_)));
}

#[test]
fn test_bare_failure_status() {
    let err = RemoteResponse::from_body(502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, RemoteError::Status(502)));
}

#[test]
fn test_malformed_body() {
    assert!(matches!(
        RemoteResponse::from_body(200, "not json"),
        Err(RemoteError::Decode(_))
    ));
    assert!(matches!(
        RemoteResponse::from_body(200, r#"{"count": 1}"#),
        Err(RemoteError::Decode(_))
    ));
}

#[test]
fn test_prefetched_replays_reply() {
    let mut parser = Prefetched::new(Some(200), REPLY);
    assert_eq!(parser.parse_text("ignored").unwrap().objects.len(), 2);
}

#[test]
fn test_prefetched_without_status_is_unavailable() {
    let mut parser = Prefetched::new(None, "");
    assert!(matches!(
        parser.parse_text("a cube"),
        Err(RemoteError::Unavailable(ref msg)) if msg == "no reply"
    ));

    let mut parser = Prefetched::new(None, "Failed to fetch");
    assert!(matches!(
        parser.parse_text("a cube"),
        Err(RemoteError::Unavailable(ref msg)) if msg == "Failed to fetch"
    ));
}
