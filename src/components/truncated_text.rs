//! Truncated Text Component
//!
//! Collapsible text with an inline toggle button.

use leptos::prelude::*;

use crate::config::Labels;
use crate::truncate::Truncation;

#[component]
pub fn TruncatedText(truncation: Truncation, labels: Labels) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let label_truncation = truncation.clone();

    view! {
        {move || truncation.text(expanded.get())}
        <button
            type="button"
            class="btn btn-link p-0 text-orange fw-bold"
            style="font-size: 0.9rem;"
            on:click=move |_| set_expanded.update(|v| *v = !*v)
        >
            {move || label_truncation.label(expanded.get(), &labels).to_string()}
        </button>
    }
}
