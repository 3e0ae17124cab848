//! Errors raised while wiring behaviors into the page.
//!
//! None of these reach the user. A behavior whose setup fails is logged and
//! skipped; the rest of the page keeps working.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window object")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
