//! WASM-compatible status notices.
//!
//! JavaScript-facing mirror of [`StatusMessage`], thrown as the error value of
//! the entry points so the page can show it directly.

use serde::Serialize;
use text_cad_pipeline::{StatusKind, StatusMessage};
use wasm_bindgen::prelude::*;

/// Notice severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl From<StatusKind> for NoticeKind {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Success => NoticeKind::Success,
            StatusKind::Error => NoticeKind::Error,
            StatusKind::Warning => NoticeKind::Warning,
            StatusKind::Info => NoticeKind::Info,
        }
    }
}

/// A transient message for the page.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { parse_text("hello"); }
/// // catch (notice) { showStatus(notice.text, notice.kind, notice.duration_ms); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    kind: NoticeKind,
    text: String,
    duration_ms: u32,
}

#[wasm_bindgen]
impl Notice {
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

impl From<StatusMessage> for Notice {
    fn from(status: StatusMessage) -> Self {
        Self {
            kind: status.kind.into(),
            text: status.text,
            duration_ms: status.duration_ms,
        }
    }
}
