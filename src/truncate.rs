//! Text Truncation
//!
//! Long `.truncate-text` blocks are cut at `data-max-length` characters and
//! get an inline "Ver más" / "Ver menos" toggle.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::TruncatedText;
use crate::config::{Labels, PageConfig};

const ELLIPSIS: &str = "... ";

/// Both renderings of a truncated text
#[derive(Debug, Clone, PartialEq)]
pub struct Truncation {
    full: String,
    truncated: String,
}

impl Truncation {
    /// `None` when the trimmed text fits within `max_chars`
    pub fn new(text: &str, max_chars: usize) -> Option<Self> {
        let full = text.trim();
        if full.chars().count() <= max_chars {
            return None;
        }
        let prefix: String = full.chars().take(max_chars).collect();
        Some(Self {
            full: full.to_string(),
            truncated: format!("{}{}", prefix, ELLIPSIS),
        })
    }

    pub fn text(&self, expanded: bool) -> String {
        if expanded {
            format!("{} ", self.full)
        } else {
            self.truncated.clone()
        }
    }

    pub fn label<'a>(&self, expanded: bool, labels: &'a Labels) -> &'a str {
        if expanded {
            &labels.show_less
        } else {
            &labels.show_more
        }
    }
}

/// Replace the content of every long `.truncate-text` element with a
/// collapsible view.
pub fn bind_truncators(doc: &Document, config: &PageConfig) {
    let selector = format!(".{}", config.classes.truncate);
    let Ok(nodes) = doc.query_selector_all(&selector) else {
        return;
    };

    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let raw_max = element.get_attribute("data-max-length").unwrap_or_default();
        let Ok(max_chars) = raw_max.trim().parse::<usize>() else {
            log::warn!("[truncate] skipping element with data-max-length={:?}", raw_max);
            continue;
        };
        let Some(truncation) = Truncation::new(&element.inner_text(), max_chars) else {
            continue;
        };

        element.set_text_content(None);
        let labels = config.labels.clone();
        let handle = mount_to(element, move || view! { <TruncatedText truncation=truncation labels=labels /> });
        // Lives as long as the page
        std::mem::forget(handle);
    }
}
