//! Click Delegation
//!
//! One listener on the article container handles every comment button,
//! including ones inserted after load.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::{edit, replies, PageController};
use crate::action::{Action, ButtonSnapshot};
use crate::api;
use crate::delete_target::DeleteTarget;
use crate::dom::{self, DisableGuard};
use crate::error::Result;
use crate::inflight::ActionKey;
use crate::likes::update_like_ui;

pub(super) fn attach_click_listener(page: &Rc<PageController>) -> Result<()> {
    let p = Rc::clone(page);
    dom::listen(&page.container, "click", move |ev| {
        let Some(button) = dom::closest_button(&ev) else {
            return;
        };
        let snapshot = ButtonSnapshot::from_element(&button);
        let Some(action) = Action::resolve(&snapshot, &p.config) else {
            return;
        };
        ev.prevent_default();
        log::debug!("[clicks] {:?}", action);
        dispatch(&p, &button, action);
    })
}

fn dispatch(page: &Rc<PageController>, button: &Element, action: Action) {
    match action {
        Action::LikeArticle { url } => {
            let count = page.doc.get_element_by_id(&page.config.ids.article_like_count);
            like(page, button, url, count);
        }
        Action::LikeComment { url } => {
            let count = dom::query(button, &format!(".{}", page.config.classes.comment_like_count));
            like(page, button, url, count);
        }
        Action::Reply { comment_id } => replies::toggle_reply_form(page, &comment_id),
        Action::CancelReply => replies::close_enclosing_form(page, button),
        Action::Edit { comment_id, content, url } => {
            if let Err(e) = edit::open(page, comment_id, &content, url) {
                log::error!("[edit] could not open editor for comment {}: {}", comment_id, e);
            }
        }
        Action::Delete { url } => match &page.delete_dialog {
            Some(dialog) => dialog.open(page, DeleteTarget::new(url)),
            None => log::error!("[delete] no confirmation dialog on the page"),
        },
    }
}

fn like(page: &PageController, button: &Element, url: String, count: Option<Element>) {
    let Some(csrf) = page.csrf_token(None) else {
        return;
    };
    let Ok(guard) = page.inflight.try_acquire(ActionKey::Like(url.clone())) else {
        return;
    };
    let disabled = DisableGuard::new(button);
    let icon = dom::query(button, "i");

    spawn_local(async move {
        let result = api::toggle_like(&url, &csrf).await;
        drop(guard);
        drop(disabled);

        match result {
            Ok(like) => update_like_ui(count.as_ref(), icon.as_ref(), like),
            Err(e) => log::error!("[likes] toggling {} failed: {}", url, e),
        }
    });
}
