//! Field selectors for read-back from JS

use wasm_bindgen::prelude::*;

/// Fields the presentation layer may read back
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Density = 0,
    VelocityX = 1,
    VelocityY = 2,
}
