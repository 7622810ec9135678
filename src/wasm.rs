//! WASM bindings for the playground and quiz.
//!
//! Exposes the resolver and a quiz session to JavaScript via wasm-bindgen.
//! Build with: `wasm-pack build --target web --features wasm`

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::quiz::QuizSession;

/// Serialize as plain JS objects (style maps become objects, not `Map`s).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Resolve playground inputs to `{ container, content, snippet }`.
///
/// Throws a JS error for an unknown method or out-of-range sizes.
#[wasm_bindgen]
pub fn resolve_style(method: &str, content_size: u32, parent_size: u32) -> Result<JsValue, JsError> {
    let descriptor = crate::resolve_request(method, content_size, parent_size)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&descriptor)
}

/// Method names accepted by `resolve_style`, in picker order.
#[wasm_bindgen]
pub fn centering_methods() -> js_sys::Array {
    crate::CenteringMethod::ALL
        .iter()
        .map(|m| JsValue::from_str(m.as_str()))
        .collect()
}

/// Quiz over the built-in questions.
#[wasm_bindgen]
pub struct Quiz {
    session: QuizSession,
}

#[wasm_bindgen]
impl Quiz {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Quiz {
        Quiz {
            session: QuizSession::default(),
        }
    }

    /// Answer the current question; throws if it was already answered.
    #[wasm_bindgen(js_name = selectAnswer)]
    pub fn select_answer(&mut self, option: usize) -> Result<JsValue, JsError> {
        let feedback = self
            .session
            .select_answer(option)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&feedback)
    }

    /// Move on; throws if the current question has not been answered.
    pub fn advance(&mut self) -> Result<JsValue, JsError> {
        let progress = self
            .session
            .advance()
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&progress)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.snapshot())
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}
