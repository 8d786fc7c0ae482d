//! Bootstrap Bindings
//!
//! The page loads Bootstrap's bundle; its Modal and Toast widgets are used
//! for the delete confirmation and the share notification.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Modal", catch)]
    fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &Modal);

    #[wasm_bindgen(method)]
    pub fn hide(this: &Modal);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Toast", catch)]
    fn new(element: &Element, options: &JsValue) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);
}

#[derive(Serialize)]
struct ToastOptions {
    delay: u32,
}

impl Modal {
    /// `None` when Bootstrap is not loaded on the page
    pub fn attach(element: &Element) -> Option<Modal> {
        match Modal::new(element) {
            Ok(modal) => Some(modal),
            Err(e) => {
                log::warn!("[bootstrap] Modal unavailable: {:?}", e);
                None
            }
        }
    }
}

impl Toast {
    pub fn attach(element: &Element, delay_ms: u32) -> Option<Toast> {
        let options = serde_wasm_bindgen::to_value(&ToastOptions { delay: delay_ms })
            .map_err(|e| log::error!("[bootstrap] Failed to serialize toast options: {}", e))
            .ok()?;
        match Toast::new(element, &options) {
            Ok(toast) => Some(toast),
            Err(e) => {
                log::warn!("[bootstrap] Toast unavailable: {:?}", e);
                None
            }
        }
    }
}
