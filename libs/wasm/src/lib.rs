//! WASM-facing entry points for the text-to-primitive pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let primitive = text_cad_wasm::parse_text_internal("a large red sphere").unwrap();
//! assert_eq!(primitive.kind(), "sphere");
//! assert_eq!(primitive.dimension_values(), &[2.0]);
//! ```

use config::constants::{PipelineConfig, DEFAULT_COLOR};
use primitive_mapper::to_primitive;
use prompt_parser::{extract, ExtractError};
use text_cad_pipeline::{Interpretation, Interpreter, Prefetched, StatusMessage};
use wasm_bindgen::prelude::*;

mod notice;
mod primitive_handle;

pub use notice::{Notice, NoticeKind};
pub use primitive_handle::PrimitiveHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "text-cad-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Color given to objects whose description names none.
///
/// # Examples
/// ```
/// assert_eq!(text_cad_wasm::default_color(), 0x667eea);
/// ```
#[wasm_bindgen]
pub fn default_color() -> u32 {
    DEFAULT_COLOR
}

/// Extracts a single primitive from a sentence.
///
/// # Errors
/// Throws a [`Notice`] of kind `Error` listing valid shape keywords when
/// the text names no shape.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const primitive = parse_text("a blue cube at 1, 2, 3");
/// // console.log(primitive.kind, primitive.x);
/// ```
#[wasm_bindgen]
pub fn parse_text(text: &str) -> Result<PrimitiveHandle, JsValue> {
    parse_text_internal(text).map_err(|err| JsValue::from(error_notice(&err)))
}

/// Interprets a sentence into every object it describes, as JSON.
///
/// JavaScript performs the optional call to the remote parser and passes the
/// raw reply here: `remote_status` is the HTTP status (absent when the fetch
/// failed or was not attempted) and `remote_body` the response text or the
/// fetch error. When both are absent only the local rules run.
///
/// # Errors
/// Throws a [`Notice`] when no object in the text names a shape.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const reply = await fetch(url, { method: "POST", body }).catch(() => null);
/// // const json = interpret_text(text, reply?.status, reply ? await reply.text() : undefined);
/// // const { primitives, status, fallback } = JSON.parse(json);
/// ```
#[wasm_bindgen]
pub fn interpret_text(
    text: &str,
    remote_status: Option<u16>,
    remote_body: Option<String>,
) -> Result<String, JsValue> {
    let interpretation = interpret_text_internal(text, remote_status, remote_body)
        .map_err(|err| JsValue::from(error_notice(&err)))?;
    serde_json::to_string(&interpretation).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`parse_text`].
///
/// # Examples
/// ```
/// let primitive = text_cad_wasm::parse_text_internal("a blue cube at 1, 2, 3").unwrap();
/// assert_eq!((primitive.x(), primitive.y(), primitive.z()), (1.0, 2.0, 3.0));
/// ```
pub fn parse_text_internal(text: &str) -> Result<PrimitiveHandle, ExtractError> {
    let record = extract(text)?;
    let spec = to_primitive(&record);
    Ok(PrimitiveHandle::new(&spec, &record))
}

/// Host-only helper behind [`interpret_text`].
pub fn interpret_text_internal(
    text: &str,
    remote_status: Option<u16>,
    remote_body: Option<String>,
) -> Result<Interpretation, ExtractError> {
    if remote_status.is_none() && remote_body.is_none() {
        return Interpreter::local().interpret(text);
    }
    let reply = Prefetched::new(remote_status, remote_body.unwrap_or_default());
    Interpreter::new(reply, &PipelineConfig::default()).interpret(text)
}

/// Host-only helper building the notice thrown for an extraction failure.
pub fn error_notice(err: &ExtractError) -> Notice {
    StatusMessage::for_error(err).into()
}
