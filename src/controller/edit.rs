//! Inline Comment Editing
//!
//! The edit form opens right under the comment text, which stays hidden
//! until the form closes. One open form per comment.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use super::PageController;
use crate::api;
use crate::config::{ClassMarkers, Labels, PageConfig};
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::inflight::ActionKey;
use crate::models::EditOutcome;
use crate::view::{el, text, El};

pub(super) struct EditSession {
    form: Element,
    comment_text: Option<HtmlElement>,
    url: String,
    _listeners: Vec<Listener>,
}

/// Markup of the inline edit form
pub fn edit_form(content: &str, classes: &ClassMarkers, labels: &Labels) -> El {
    el("form")
        .class(&format!("{} mt-2", classes.edit_controls))
        .child(
            el("textarea")
                .class("form-control mb-2")
                .attr("rows", "2")
                .attr("required", "")
                .attr("style", "border-radius:8px;")
                .child(text(content)),
        )
        .child(
            el("div")
                .class("d-flex gap-2")
                .child(
                    el("button")
                        .attr("type", "submit")
                        .class("btn btn-orange btn-sm")
                        .child(text(labels.save.as_str())),
                )
                .child(
                    el("button")
                        .attr("type", "button")
                        .class("btn btn-outline-secondary btn-sm cancel-edit")
                        .child(text(labels.cancel.as_str())),
                ),
        )
}

pub(super) fn open(page: &Rc<PageController>, comment_id: u32, content: &str, url: String) -> Result<()> {
    let Some(wrapper) = page.doc.get_element_by_id(&PageConfig::comment_element_id(comment_id)) else {
        return Ok(());
    };
    let controls_selector = format!(".{}", page.config.classes.edit_controls);
    if page.edits.borrow().contains_key(&comment_id) || dom::query(&wrapper, &controls_selector).is_some() {
        return Ok(());
    }

    let comment_text = dom::query(&wrapper, &format!(".{}", page.config.classes.comment_text))
        .and_then(|t| t.dyn_into::<HtmlElement>().ok());
    let form = edit_form(content, &page.config.classes, &page.config.labels).render(&page.doc)?;

    match &comment_text {
        Some(text_el) => {
            text_el.style().set_property("display", "none")?;
            text_el.after_with_node_1(&form)?;
        }
        None => {
            wrapper.append_child(&form)?;
        }
    }

    let mut listeners = Vec::new();
    if let Some(cancel) = dom::query(&form, ".cancel-edit") {
        let p = Rc::clone(page);
        listeners.push(dom::listener(&cancel, "click", move |ev| {
            ev.prevent_default();
            let p = Rc::clone(&p);
            // Closing drops this listener, so it runs after the handler returns
            spawn_local(async move { close(&p, comment_id, true) });
        })?);
    }
    {
        let p = Rc::clone(page);
        listeners.push(dom::listener(&form, "submit", move |ev| {
            ev.prevent_default();
            save(&p, comment_id);
        })?);
    }

    page.edits.borrow_mut().insert(
        comment_id,
        EditSession {
            form,
            comment_text,
            url,
            _listeners: listeners,
        },
    );
    Ok(())
}

/// Remove the form; `restore_text` shows the original text again
fn close(page: &PageController, comment_id: u32, restore_text: bool) {
    let Some(session) = page.edits.borrow_mut().remove(&comment_id) else {
        return;
    };
    session.form.remove();
    if restore_text {
        if let Some(text_el) = &session.comment_text {
            let _ = text_el.style().remove_property("display");
        }
    }
}

fn save(page: &Rc<PageController>, comment_id: u32) {
    let (url, content, comment_text) = {
        let edits = page.edits.borrow();
        let Some(session) = edits.get(&comment_id) else {
            return;
        };
        let content = dom::query(&session.form, "textarea")
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            .map(|t| t.value().trim().to_string())
            .unwrap_or_default();
        (session.url.clone(), content, session.comment_text.clone())
    };
    if content.is_empty() {
        return;
    }
    let Some(csrf) = page.csrf_token(None) else {
        return;
    };
    let Ok(guard) = page.inflight.try_acquire(ActionKey::Edit(comment_id)) else {
        return;
    };

    let page = Rc::clone(page);
    spawn_local(async move {
        let result = api::edit_comment(&url, &csrf, &content).await;
        drop(guard);

        match result.map(|resp| resp.outcome()) {
            Ok(EditOutcome::Saved(html)) => {
                apply_saved(&page, comment_id, comment_text.as_ref(), html.as_deref(), &content);
            }
            Ok(EditOutcome::Failed(message)) => {
                let message = message.unwrap_or_else(|| page.config.labels.edit_failed.clone());
                dom::alert(&page.window, &message);
            }
            Err(e) => {
                log::error!("[edit] editing comment {} via {} failed: {}", comment_id, url, e);
                dom::alert(&page.window, &page.config.labels.edit_failed);
            }
        }
    });
}

/// Show the saved text. The form may already be gone if the user cancelled
/// while the request was in flight; the text is updated either way.
fn apply_saved(page: &PageController, comment_id: u32, old: Option<&HtmlElement>, html: Option<&str>, submitted: &str) {
    if let Some(old) = old {
        if let Err(e) = replace_text(page, old, html, submitted) {
            log::error!("[edit] could not update comment {}: {}", comment_id, e);
        }
    }
    close(page, comment_id, false);
    update_edit_button(page, comment_id, submitted);
}

/// Swap the comment text for the server-rendered version, or for the
/// submitted text when the server sent none.
fn replace_text(page: &PageController, old: &HtmlElement, html: Option<&str>, submitted: &str) -> Result<()> {
    let parsed = match html {
        Some(html) => dom::parse_fragment(&page.doc, html)?,
        None => None,
    };
    let replacement = match parsed {
        Some(element) => element,
        None => el("p")
            .class(&page.config.classes.comment_text)
            .child(text(submitted))
            .render(&page.doc)?,
    };
    old.replace_with_with_node_1(&replacement)?;
    Ok(())
}

/// Keep `data-content` in step so reopening the editor shows the saved text
fn update_edit_button(page: &PageController, comment_id: u32, content: &str) {
    let Some(wrapper) = page.doc.get_element_by_id(&PageConfig::comment_element_id(comment_id)) else {
        return;
    };
    let selector = format!(".{}[data-id=\"{}\"]", page.config.classes.edit_button, comment_id);
    if let Some(button) = dom::query(&wrapper, &selector) {
        let _ = button.set_attribute("data-content", content);
    }
}
