//! # Remote Parser Contract
//!
//! Decoding side of the optional model-backed parse service. The transport
//! itself (HTTP fetch) lives with the caller; this module only turns a raw
//! reply into records or a [`RemoteError`].
//!
//! ## Reply Format
//!
//! ```text
//! 200 {"objects": [{shape, size, radius, height, color, position: {x, y, z}, confidence}],
//!      "count": n, "interpretation": "...", "ml_powered": true}
//! 4xx/5xx {"error": "..."}
//! ```

use config::constants::{DEFAULT_COLOR, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SIZE};
use glam::DVec3;
use prompt_parser::{Color, ParameterRecord, Shape};
use serde::{Deserialize, Serialize};

use crate::error::{RemoteError, RemoteResult};

/// A service that interprets raw text into parameter-like objects.
///
/// Implementations own the transport. Any failure is reported as a
/// [`RemoteError`] and triggers the local fallback.
pub trait RemoteParser {
    fn parse_text(&mut self, text: &str) -> RemoteResult<RemoteResponse>;
}

/// Marker for interpreters that never consult a remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOnly {}

impl RemoteParser for LocalOnly {
    fn parse_text(&mut self, _text: &str) -> RemoteResult<RemoteResponse> {
        match *self {}
    }
}

/// A reply the caller already fetched, replayed as a remote parser.
///
/// `status` is `None` when the request never completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefetched {
    status: Option<u16>,
    body: String,
}

impl Prefetched {
    pub fn new(status: Option<u16>, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl RemoteParser for Prefetched {
    fn parse_text(&mut self, _text: &str) -> RemoteResult<RemoteResponse> {
        match self.status {
            Some(status) => RemoteResponse::from_body(status, &self.body),
            None => Err(RemoteError::Unavailable(if self.body.is_empty() {
                "no reply".to_string()
            } else {
                self.body.clone()
            })),
        }
    }
}

/// Object position as sent by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RemotePosition {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// One object in a service reply. Missing fields take the local defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteObject {
    pub shape: Shape,
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_color")]
    pub color: u32,
    #[serde(default)]
    pub position: RemotePosition,
    #[serde(default)]
    pub confidence: Option<f64>,
}

fn default_size() -> f64 {
    DEFAULT_SIZE
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_color() -> u32 {
    DEFAULT_COLOR
}

impl RemoteObject {
    /// Convert to a record. Dimensions are taken as sent, without the
    /// local shape defaults or torus rescaling.
    pub fn to_record(&self) -> ParameterRecord {
        ParameterRecord {
            shape: self.shape,
            color: Color::new(self.color),
            size: self.size,
            radius: self.radius,
            height: self.height,
            position: DVec3::new(self.position.x, self.position.y, self.position.z),
            detected_tags: vec!["source:model".to_string()],
        }
    }
}

/// A successful service reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub objects: Vec<RemoteObject>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub interpretation: String,
    #[serde(default)]
    pub ml_powered: bool,
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

impl RemoteResponse {
    /// Decode a raw HTTP reply.
    ///
    /// ## Errors
    ///
    /// - [`RemoteError::Service`] for an `{"error": ...}` payload, whatever the status
    /// - [`RemoteError::Status`] for any other non-2xx status
    /// - [`RemoteError::Decode`] when a 2xx body is not a reply object
    ///
    /// ## Example
    ///
    /// ```rust
    /// use text_cad_pipeline::RemoteResponse;
    ///
    /// let body = r#"{"objects":[{"shape":"cube","color":16729156}],"ml_powered":true}"#;
    /// let response = RemoteResponse::from_body(200, body).unwrap();
    /// assert_eq!(response.objects.len(), 1);
    /// assert!(RemoteResponse::from_body(500, "oops").is_err());
    /// ```
    pub fn from_body(status: u16, body: &str) -> RemoteResult<Self> {
        if !(200..300).contains(&status) {
            return Err(match serde_json::from_str::<ErrorPayload>(body) {
                Ok(payload) => RemoteError::Service(payload.error),
                Err(_) => RemoteError::Status(status),
            });
        }

        let value: serde_json::Value = serde_json::from_str(body)?;
        if let Some(error) = value.get("error").and_then(serde_json::Value::as_str) {
            return Err(RemoteError::Service(error.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Records for every object, in reply order.
    pub fn records(&self) -> Vec<ParameterRecord> {
        self.objects.iter().map(RemoteObject::to_record).collect()
    }

    /// Mean per-object confidence, if the service sent any.
    pub fn confidence(&self) -> Option<f64> {
        let scores: Vec<f64> = self.objects.iter().filter_map(|o| o.confidence).collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

#[cfg(test)]
mod tests;
