//! # Text CAD Pipeline
//!
//! Everything between a sentence and the objects in a scene, above the
//! single-object extractor and mapper.
//!
//! ## Architecture
//!
//! ```text
//! text → Interpreter ─┬─ RemoteParser (optional, may fail)
//!                     └─ Composer → Extractor (per object)
//!                               ↓
//!                            Mapper → PrimitiveSpec → Scene<Renderer::Handle>
//!                               ↓
//!                         StatusMessage
//! ```
//!
//! ## Example
//!
//! ```rust
//! use text_cad_pipeline::{compose, Interpreter};
//!
//! let records = compose("stack 3 cubes").unwrap();
//! assert_eq!(records[2].position.y, 4.0);
//!
//! let result = Interpreter::local().interpret("a red sphere and a blue cube").unwrap();
//! assert_eq!(result.status.text, "Created 2 objects: red sphere, blue cube");
//! ```

pub mod compose;
pub mod error;
pub mod interpret;
pub mod remote;
pub mod scene;
pub mod status;

// Re-export public API
pub use compose::{compose, Composer};
pub use error::{RemoteError, RemoteResult};
pub use interpret::{Interpretation, Interpreter, Provenance};
pub use remote::{LocalOnly, Prefetched, RemoteObject, RemoteParser, RemotePosition, RemoteResponse};
pub use scene::{Renderer, Scene, SceneObject};
pub use status::{StatusKind, StatusMessage};
