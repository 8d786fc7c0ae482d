//! CSRF Token Resolution
//!
//! Lookup order: the hidden input inside the submitting form, any hidden
//! input in the document, then the `csrftoken` cookie.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlInputElement};

const TOKEN_INPUT_SELECTOR: &str = r#"input[name="csrfmiddlewaretoken"]"#;
const TOKEN_COOKIE: &str = "csrftoken";

/// Find a cookie value by name in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|row| row.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Pick the first non-empty candidate in preference order
pub fn resolve(form_token: Option<String>, document_token: Option<String>, cookies: &str) -> Option<String> {
    form_token
        .filter(|t| !t.is_empty())
        .or_else(|| document_token.filter(|t| !t.is_empty()))
        .or_else(|| cookie_value(cookies, TOKEN_COOKIE).filter(|t| !t.is_empty()))
}

fn input_value(scope: Option<Element>) -> Option<String> {
    scope?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Resolve the token for a request, optionally scoped to a form
pub fn csrf_token(doc: &Document, form: Option<&Element>) -> Option<String> {
    let form_token = form.and_then(|f| input_value(f.query_selector(TOKEN_INPUT_SELECTOR).ok().flatten()));
    let document_token = input_value(doc.query_selector(TOKEN_INPUT_SELECTOR).ok().flatten());
    let cookies = doc
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default();

    let token = resolve(form_token, document_token, &cookies);
    if token.is_none() {
        log::error!("[csrf] CSRF token not found");
    }
    token
}
