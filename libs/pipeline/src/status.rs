//! # Status Messages
//!
//! Short user-facing text produced after each interpretation. Display and
//! dismissal belong to the presentation layer; this module only decides the
//! wording and the severity.

use std::fmt;

use config::constants::STATUS_DURATION_MS;
use prompt_parser::{ExtractError, ParameterRecord};
use serde::{Deserialize, Serialize};

use crate::interpret::Provenance;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Warning => "warning",
            StatusKind::Info => "info",
        };
        f.write_str(name)
    }
}

/// A transient message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    /// How long the message should stay visible.
    pub duration_ms: u32,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            duration_ms: STATUS_DURATION_MS,
        }
    }

    /// Override the display duration.
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Success message naming what was created.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use prompt_parser::extract;
    /// use text_cad_pipeline::{Provenance, StatusKind, StatusMessage};
    ///
    /// let record = extract("a large red sphere").unwrap();
    /// let status = StatusMessage::for_records(&[record], Provenance::Rules);
    /// assert_eq!(status.kind, StatusKind::Success);
    /// assert_eq!(status.text, "Created large red sphere");
    /// ```
    pub fn for_records(records: &[ParameterRecord], provenance: Provenance) -> Self {
        let names: Vec<String> = records.iter().map(ParameterRecord::describe).collect();
        let mut text = match names.as_slice() {
            [] => "Nothing to create".to_string(),
            [single] => format!("Created {single}"),
            many => format!("Created {} objects: {}", many.len(), many.join(", ")),
        };
        if provenance == Provenance::Model {
            text.push_str(" (model)");
        }
        Self::new(StatusKind::Success, text)
    }

    /// Error message with a hint listing usable shape words.
    pub fn for_error(error: &ExtractError) -> Self {
        Self::new(
            StatusKind::Error,
            format!("Could not understand the description. {}", error.suggestion()),
        )
    }

    /// Warning shown when the remote parser was skipped.
    pub fn fallback(reason: &str) -> Self {
        Self::new(
            StatusKind::Warning,
            format!("Remote parser unavailable ({reason}); used local rules"),
        )
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use prompt_parser::{extract, Shape};

    use super::*;

    #[test]
    fn test_single_record() {
        let status = StatusMessage::for_records(&[ParameterRecord::new(Shape::Cube)], Provenance::Rules);
        assert_eq!(status.text, "Created cube");
        assert_eq!(status.duration_ms, STATUS_DURATION_MS);
    }

    #[test]
    fn test_many_records_model() {
        let records = [extract("a blue cone").unwrap(), extract("a tiny ball").unwrap()];
        let status = StatusMessage::for_records(&records, Provenance::Model);
        assert_eq!(status.text, "Created 2 objects: blue cone, small sphere (model)");
    }

    #[test]
    fn test_error_lists_keywords() {
        let status = StatusMessage::for_error(&ExtractError::no_shape("hmm"));
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("donut"));
    }

    #[test]
    fn test_fallback_is_warning() {
        let status = StatusMessage::fallback("status 503").with_duration(500);
        assert_eq!(status.kind, StatusKind::Warning);
        assert_eq!(status.duration_ms, 500);
        assert_eq!(status.to_string(), "[warning] Remote parser unavailable (status 503); used local rules");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StatusKind::Info).unwrap(), "\"info\"");
    }
}
