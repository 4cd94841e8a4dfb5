//! # Primitive Handle
//!
//! WASM-friendly wrapper around one mapped primitive that JavaScript turns
//! into a mesh.

use primitive_mapper::PrimitiveSpec;
use prompt_parser::ParameterRecord;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A primitive ready to be built by the renderer.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const primitive = parse_text("a large red sphere at 2,0,1");
///
/// // kind() selects the geometry constructor, dimensions() are its arguments
/// const [radius] = primitive.dimensions();   // Float64Array
/// const geometry = new THREE.SphereGeometry(radius, 32, 32);
///
/// const material = new THREE.MeshStandardMaterial({ color: primitive.color });
/// const mesh = new THREE.Mesh(geometry, material);
/// mesh.position.set(primitive.x, primitive.y, primitive.z);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveHandle {
    /// Canonical shape name
    kind: String,
    /// 24-bit RGB color
    color: u32,
    /// Position in scene units
    x: f64,
    y: f64,
    z: f64,
    /// Constructor arguments in positional order
    dimensions: Vec<f64>,
    /// Extraction rules that fired
    detected_tags: Vec<String>,
}

impl PrimitiveHandle {
    pub(crate) fn new(spec: &PrimitiveSpec, record: &ParameterRecord) -> Self {
        Self {
            kind: spec.kind().name().to_string(),
            color: spec.color.rgb(),
            x: spec.position.x,
            y: spec.position.y,
            z: spec.position.z,
            dimensions: spec.geometry.arguments(),
            detected_tags: record.detected_tags.clone(),
        }
    }

    /// Constructor arguments without crossing into JS.
    pub fn dimension_values(&self) -> &[f64] {
        &self.dimensions
    }
}

#[wasm_bindgen]
impl PrimitiveHandle {
    /// Canonical shape name: sphere, cube, cylinder, torus or cone.
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.kind.clone()
    }

    /// Color as `0xRRGGBB`.
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Color as a CSS `#rrggbb` string.
    #[wasm_bindgen(getter)]
    pub fn color_hex(&self) -> String {
        format!("#{:06x}", self.color)
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Geometry constructor arguments as a Float64Array.
    ///
    /// Sphere `[radius]`, cube `[edge]`, cylinder
    /// `[radiusTop, radiusBottom, height]`, torus `[radius, tube]`,
    /// cone `[radius, height]`.
    pub fn dimensions(&self) -> Vec<f64> {
        self.dimensions.clone()
    }

    /// Extraction trace, one entry per rule that fired.
    pub fn detected_tags(&self) -> Vec<String> {
        self.detected_tags.clone()
    }

    /// Plain JSON copy, for posting between worker and main thread.
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}
