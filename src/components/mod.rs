//! UI Components
//!
//! Leptos components mounted into server-rendered markup.

mod truncated_text;

pub use truncated_text::TruncatedText;
