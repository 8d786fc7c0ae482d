//! Error Types
//!
//! Failures raised by page handlers. Handlers log these instead of
//! propagating them to the browser, so none of them is fatal to the page.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum UiError {
    #[error("CSRF token not found")]
    MissingCsrfToken,

    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),

    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("JS error: {0}")]
    Js(String),

    #[error("action already in flight")]
    Busy,
}

impl From<gloo_net::Error> for UiError {
    fn from(e: gloo_net::Error) -> Self {
        UiError::Network(e.to_string())
    }
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        UiError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
