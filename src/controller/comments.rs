//! Comment and Reply Submission
//!
//! Both forms post `{content, parent_id}` as JSON and insert the
//! server-rendered fragment on success.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

use super::{replies, PageController};
use crate::api;
use crate::dom;
use crate::error::{Result, UiError};
use crate::inflight::ActionKey;
use crate::models::{CreateOutcome, NewCommentBody};

/// Validated form input
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub content: String,
    pub parent_id: String,
}

impl CommentDraft {
    /// `None` for empty or whitespace-only content
    pub fn new(raw_content: &str, parent_id: &str) -> Option<Self> {
        let content = raw_content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            content: content.to_string(),
            parent_id: parent_id.to_string(),
        })
    }

    fn read(form: &Element) -> Option<Self> {
        let content = dom::content_textarea(form).map(|t| t.value()).unwrap_or_default();
        let parent_id = dom::query(form, r#"input[name="parent_id"]"#)
            .and_then(|i| i.dyn_into::<HtmlInputElement>().ok())
            .map(|i| i.value())
            .unwrap_or_default();
        Self::new(&content, &parent_id)
    }
}

/// What the page does with the result of a create request
#[derive(Debug, Clone, PartialEq)]
enum PostReaction {
    Insert(String),
    Alert(String),
    /// Nothing shown; the comment may still have been stored
    Ignore,
}

impl PostReaction {
    fn from_result(result: Result<CreateOutcome>, url: &str) -> Self {
        match result {
            Ok(CreateOutcome::Created(html)) => PostReaction::Insert(html),
            Ok(CreateOutcome::Rejected(message)) => PostReaction::Alert(message),
            Ok(CreateOutcome::Ignored) => {
                log::warn!("[comments] response had neither comment_html nor error");
                PostReaction::Ignore
            }
            Err(UiError::Decode(e)) => {
                log::warn!("[comments] non-JSON response to {}: {}", url, e);
                PostReaction::Ignore
            }
            Err(e) => {
                log::error!("[comments] posting to {} failed: {}", url, e);
                PostReaction::Ignore
            }
        }
    }
}

/// Where a reply ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplyPlacement {
    Appended,
    /// The parent has no replies area; the page must reload to show the reply
    AreaMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Newest first in the main comments list
    Top,
    /// Appended under the parent comment
    Reply,
}

pub(super) fn attach_main_form_listener(page: &Rc<PageController>) -> Result<()> {
    let Some(form) = page.doc.get_element_by_id(&page.config.ids.main_comment_form) else {
        return Ok(());
    };
    let p = Rc::clone(page);
    let f = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        submit(&p, &f, Placement::Top);
    })
}

pub(super) fn attach_reply_form_listener(page: &Rc<PageController>) -> Result<()> {
    let p = Rc::clone(page);
    dom::listen(&page.container, "submit", move |ev| {
        let Some(form) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !form.class_list().contains(&p.config.classes.reply_form) {
            return;
        }
        ev.prevent_default();
        submit(&p, &form, Placement::Reply);
    })
}

fn submit(page: &Rc<PageController>, form: &Element, placement: Placement) {
    let Some(draft) = CommentDraft::read(form) else {
        return;
    };
    let Some(csrf) = page.csrf_token(Some(form)) else {
        return;
    };
    let url = form
        .dyn_ref::<HtmlFormElement>()
        .map(|f| f.action())
        .unwrap_or_default();
    let Ok(guard) = page
        .inflight
        .try_acquire(ActionKey::Post(format!("{}|{}", url, draft.parent_id)))
    else {
        return;
    };

    let page = Rc::clone(page);
    let form = form.clone();
    spawn_local(async move {
        let body = NewCommentBody {
            content: &draft.content,
            parent_id: &draft.parent_id,
        };
        let result = api::create_comment(&url, &csrf, &body).await;
        drop(guard);

        match PostReaction::from_result(result.map(|resp| resp.outcome()), &url) {
            PostReaction::Insert(html) => {
                let inserted = match placement {
                    Placement::Top => insert_top(&page, &form, &html),
                    Placement::Reply => insert_reply(&page, &form, &draft.parent_id, &html).map(|placed| {
                        if placed == ReplyPlacement::AreaMissing {
                            dom::reload(&page.window);
                        }
                    }),
                };
                if let Err(e) = inserted {
                    log::error!("[comments] could not insert comment: {}", e);
                }
            }
            PostReaction::Alert(message) => dom::alert(&page.window, &message),
            PostReaction::Ignore => {}
        }
    });
}

fn clear_textarea(form: &Element) {
    if let Some(textarea) = dom::content_textarea(form) {
        textarea.set_value("");
    }
}

fn insert_top(page: &PageController, form: &Element, html: &str) -> Result<()> {
    let container = page
        .doc
        .get_element_by_id(&page.config.ids.comments_container)
        .ok_or(UiError::MissingElement("comments container"))?;
    let Some(comment) = dom::parse_fragment(&page.doc, html)? else {
        return Ok(());
    };

    container.prepend_with_node_1(&comment)?;
    clear_textarea(form);
    dom::fade_in_and_scroll(&comment, &page.config);
    Ok(())
}

fn insert_reply(page: &PageController, form: &Element, parent_id: &str, html: &str) -> Result<ReplyPlacement> {
    let placed = match replies::replies_area(page, parent_id) {
        Some(area) => {
            if let Some(reply) = dom::parse_fragment(&page.doc, html)? {
                area.append_child(&reply)?;
                dom::fade_in_and_scroll(&reply, &page.config);
            }
            ReplyPlacement::Appended
        }
        None => {
            log::warn!("[comments] replies area for comment {} not found, reloading", parent_id);
            ReplyPlacement::AreaMissing
        }
    };

    replies::close_enclosing_form(page, form);
    clear_textarea(form);
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_content_is_rejected() {
        assert_eq!(CommentDraft::new("", ""), None);
        assert_eq!(CommentDraft::new("   \n\t ", "4"), None);
    }

    #[test]
    fn test_content_is_trimmed() {
        let draft = CommentDraft::new("  Buen artículo \n", "").unwrap();
        assert_eq!(draft.content, "Buen artículo");
        assert_eq!(draft.parent_id, "");
    }

    #[test]
    fn test_parent_id_is_kept_verbatim() {
        let draft = CommentDraft::new("Gracias", "12").unwrap();
        assert_eq!(draft.parent_id, "12");
    }

    #[test]
    fn test_html_error_page_is_not_surfaced() {
        let forbidden = api::decode_body::<crate::models::CreateResponse>(false, 403, "<h1>Forbidden (403)</h1>");
        assert!(matches!(forbidden, Err(UiError::Status(403))));
        assert_eq!(
            PostReaction::from_result(forbidden.map(|r| r.outcome()), "/blog/comentar/"),
            PostReaction::Ignore
        );
    }

    #[test]
    fn test_network_and_decode_failures_are_not_surfaced() {
        let network = Err(UiError::Network("connection reset".into()));
        assert_eq!(PostReaction::from_result(network, "/c/"), PostReaction::Ignore);

        let html_ok = api::decode_body::<crate::models::CreateResponse>(true, 200, "<!DOCTYPE html>");
        assert_eq!(PostReaction::from_result(html_ok.map(|r| r.outcome()), "/c/"), PostReaction::Ignore);
    }

    #[test]
    fn test_created_and_rejected_outcomes() {
        assert_eq!(
            PostReaction::from_result(Ok(CreateOutcome::Created("<div></div>".into())), "/c/"),
            PostReaction::Insert("<div></div>".into())
        );
        assert_eq!(
            PostReaction::from_result(Ok(CreateOutcome::Rejected("Comentario vacío".into())), "/c/"),
            PostReaction::Alert("Comentario vacío".into())
        );
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod dom_tests {
    use wasm_bindgen_test::*;

    use super::super::fixture::Fixture;
    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const ARTICLE: &str = r#"
        <form id="main-comment-form" action="/blog/comentar/">
            <textarea name="content">Buen artículo</textarea>
        </form>
        <div id="comments-container"><div id="comment-1" class="comment">Primero</div></div>
    "#;

    fn textarea_value(form: &Element) -> String {
        dom::content_textarea(form).map(|t| t.value()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_insert_top_prepends_one_comment_and_clears_textarea() {
        let fx = Fixture::new(ARTICLE);
        let form = fx.get("main-comment-form");

        insert_top(&fx.page, &form, "\n  <div id=\"comment-2\" class=\"comment\">Nuevo</div>\n").unwrap();

        let container = fx.get("comments-container");
        assert_eq!(container.child_element_count(), 2);
        let first = container.first_element_child().unwrap();
        assert_eq!(first.id(), "comment-2");
        assert!(first.class_list().contains("fade-in-comment"));
        assert_eq!(textarea_value(&form), "");
    }

    const THREAD: &str = r#"
        <div id="comments-container">
            <div id="comment-1">
                <div class="replies-divider"></div>
                <div id="reply-form-1" class="reply-form-container">
                    <form class="reply-form-wrapper" action="/blog/comentar/">
                        <textarea name="content">Respuesta</textarea>
                    </form>
                </div>
            </div>
            <div id="comment-2">
                <div class="replies-divider"></div>
                <div id="reply-form-2" class="reply-form-container d-none"></div>
            </div>
        </div>
    "#;

    #[wasm_bindgen_test]
    fn test_insert_reply_appends_under_its_parent_only() {
        let fx = Fixture::new(THREAD);
        let form = dom::query(&fx.get("reply-form-1"), "form").unwrap();

        let placed = insert_reply(&fx.page, &form, "1", r#"<div id="comment-9">Respuesta</div>"#).unwrap();
        assert_eq!(placed, ReplyPlacement::Appended);

        let area_1 = dom::query(&fx.get("comment-1"), ".replies-divider").unwrap();
        let area_2 = dom::query(&fx.get("comment-2"), ".replies-divider").unwrap();
        assert_eq!(area_1.child_element_count(), 1);
        assert_eq!(area_1.first_element_child().unwrap().id(), "comment-9");
        assert_eq!(area_2.child_element_count(), 0);

        assert!(fx.get("reply-form-1").class_list().contains("d-none"));
        assert_eq!(textarea_value(&form), "");
    }

    #[wasm_bindgen_test]
    fn test_insert_reply_without_replies_area_asks_for_reload() {
        let fx = Fixture::new(
            r#"<div id="comment-3">
                <div id="reply-form-3" class="reply-form-container">
                    <form class="reply-form-wrapper"><textarea name="content">x</textarea></form>
                </div>
            </div>"#,
        );
        let form = dom::query(&fx.get("reply-form-3"), "form").unwrap();

        let placed = insert_reply(&fx.page, &form, "3", r#"<div id="comment-10"></div>"#).unwrap();
        assert_eq!(placed, ReplyPlacement::AreaMissing);
        assert!(fx.doc.get_element_by_id("comment-10").is_none());
    }
}
