//! # Interpreter
//!
//! Top-level text → primitives entry point. Asks the optional remote parser
//! first and falls back to the local rules whenever the remote reply cannot
//! be used.
//!
//! ```text
//! text ─▶ RemoteParser ──ok, non-empty──▶ records (Model / service flag)
//!            │
//!            └─error or empty─▶ compose ─▶ records (Rules, 0.7)
//!                                    │
//!                      records ─▶ Mapper ─▶ primitives
//! ```

use config::constants::{PipelineConfig, RULE_BASED_CONFIDENCE};
use primitive_mapper::{Mapper, PrimitiveSpec};
use prompt_parser::{ExtractResult, ParameterRecord};
use serde::{Deserialize, Serialize};

use crate::compose::Composer;
use crate::remote::{LocalOnly, RemoteParser, RemoteResponse};
use crate::status::StatusMessage;

/// Where the records of an interpretation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// A trained model behind the remote service.
    Model,
    /// Keyword rules, local or remote.
    Rules,
}

/// Result of interpreting one sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub primitives: Vec<PrimitiveSpec>,
    pub records: Vec<ParameterRecord>,
    pub confidence: f64,
    pub provenance: Provenance,
    /// Success message describing the created objects.
    pub status: StatusMessage,
    /// Warning set when the remote parser was asked but not used.
    pub fallback: Option<StatusMessage>,
}

/// Drives remote-then-local interpretation.
///
/// ## Example
///
/// ```rust
/// use text_cad_pipeline::{Interpreter, Provenance};
///
/// let mut interpreter = Interpreter::local();
/// let result = interpreter.interpret("3 cubes").unwrap();
/// assert_eq!(result.primitives.len(), 3);
/// assert_eq!(result.provenance, Provenance::Rules);
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter<R = LocalOnly> {
    remote: Option<R>,
    composer: Composer,
    mapper: Mapper,
    status_duration_ms: u32,
}

impl Interpreter<LocalOnly> {
    /// Interpreter that only uses the local rules.
    pub fn local() -> Self {
        Self::build(None, &PipelineConfig::default())
    }

    /// Local-only interpreter with custom configuration.
    pub fn local_with_config(config: &PipelineConfig) -> Self {
        Self::build(None, config)
    }
}

impl<R: RemoteParser> Interpreter<R> {
    /// Interpreter that consults `remote` before the local rules.
    pub fn new(remote: R, config: &PipelineConfig) -> Self {
        Self::build(Some(remote), config)
    }

    fn build(remote: Option<R>, config: &PipelineConfig) -> Self {
        Self {
            remote,
            composer: Composer::new(config),
            mapper: Mapper::new(config),
            status_duration_ms: config.status_duration_ms,
        }
    }

    /// Give back the remote collaborator.
    pub fn into_remote(self) -> Option<R> {
        self.remote
    }

    /// Interpret one sentence into primitives.
    ///
    /// ## Errors
    ///
    /// `NoShapeDetected` only when the local rules are used and find no shape.
    /// Remote failures never surface here.
    pub fn interpret(&mut self, text: &str) -> ExtractResult<Interpretation> {
        let mut fallback = None;
        if let Some(remote) = self.remote.as_mut() {
            match remote.parse_text(text) {
                Ok(response) if !response.objects.is_empty() => {
                    return Ok(self.remote_interpretation(&response));
                }
                Ok(_) => {
                    tracing::warn!("remote parser returned no objects, using local rules");
                    fallback = Some("no objects returned".to_string());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "remote parser failed, using local rules");
                    fallback = Some(err.to_string());
                }
            }
        }

        let records = self.composer.compose(text)?;
        Ok(Interpretation {
            primitives: self.map_all(&records),
            status: StatusMessage::for_records(&records, Provenance::Rules)
                .with_duration(self.status_duration_ms),
            fallback: fallback.map(|reason| {
                StatusMessage::fallback(&reason).with_duration(self.status_duration_ms)
            }),
            records,
            confidence: RULE_BASED_CONFIDENCE,
            provenance: Provenance::Rules,
        })
    }

    fn remote_interpretation(&self, response: &RemoteResponse) -> Interpretation {
        let records = response.records();
        let provenance = if response.ml_powered {
            Provenance::Model
        } else {
            Provenance::Rules
        };
        tracing::debug!(count = records.len(), ?provenance, "using remote interpretation");

        Interpretation {
            primitives: self.map_all(&records),
            status: StatusMessage::for_records(&records, provenance)
                .with_duration(self.status_duration_ms),
            fallback: None,
            records,
            confidence: response.confidence().unwrap_or(RULE_BASED_CONFIDENCE),
            provenance,
        }
    }

    fn map_all(&self, records: &[ParameterRecord]) -> Vec<PrimitiveSpec> {
        records.iter().map(|record| self.mapper.map(record)).collect()
    }
}
