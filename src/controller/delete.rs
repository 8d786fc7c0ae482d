//! Delete Confirmation
//!
//! Opening the dialog binds the target into the confirm button's handler.
//! Hiding the dialog or settling the request unbinds it, so a later confirm
//! can never act on a stale target.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use super::PageController;
use crate::api;
use crate::bootstrap::Modal;
use crate::config::PageConfig;
use crate::delete_target::DeleteTarget;
use crate::dom::{self, DisableGuard, Listener};
use crate::error::{Result, UiError};
use crate::inflight::ActionKey;

pub(super) struct DeleteDialog {
    modal_el: Option<Element>,
    modal: Option<Modal>,
    confirm_button: Element,
    armed: RefCell<Option<Listener>>,
}

impl DeleteDialog {
    /// `None` when the page has no confirm button
    pub(super) fn from_document(doc: &Document, config: &PageConfig) -> Option<Self> {
        let confirm_button = doc.get_element_by_id(&config.ids.delete_confirm_button)?;
        let modal_el = doc.get_element_by_id(&config.ids.delete_modal);
        let modal = modal_el.as_ref().and_then(Modal::attach);
        Some(Self {
            modal_el,
            modal,
            confirm_button,
            armed: RefCell::new(None),
        })
    }

    pub(super) fn open(&self, page: &Rc<PageController>, target: DeleteTarget) {
        if page.inflight.is_busy(&ActionKey::Delete(target.url.clone())) {
            log::debug!("[delete] {} is already being deleted", target.url);
            return;
        }
        let p = Rc::clone(page);
        let handler = Listener::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            confirm(&p, target.clone());
        });

        let Some(button) = self.confirm_button.dyn_ref::<HtmlElement>() else {
            return;
        };
        button.set_onclick(Some(handler.as_ref().unchecked_ref()));
        // replacing the previous handler also drops its target
        self.armed.replace(Some(handler));

        match &self.modal {
            Some(modal) => modal.show(),
            None => log::warn!("[delete] no confirmation modal to show"),
        }
    }

    fn disarm(&self) {
        if let Some(button) = self.confirm_button.dyn_ref::<HtmlElement>() {
            button.set_onclick(None);
        }
        self.armed.replace(None);
    }

    /// Hide the modal and unbind the target
    fn settle(&self) {
        if let Some(modal) = &self.modal {
            modal.hide();
        }
        self.disarm();
    }
}

pub(super) fn attach_dialog_listeners(page: &Rc<PageController>) -> Result<()> {
    let Some(modal_el) = page.delete_dialog.as_ref().and_then(|d| d.modal_el.clone()) else {
        return Ok(());
    };
    let p = Rc::clone(page);
    dom::listen(&modal_el, "hidden.bs.modal", move |_| {
        if let Some(dialog) = &p.delete_dialog {
            dialog.disarm();
        }
    })
}

fn confirm(page: &Rc<PageController>, target: DeleteTarget) {
    let Some(dialog) = &page.delete_dialog else {
        return;
    };
    let Ok(guard) = page.inflight.try_acquire(ActionKey::Delete(target.url.clone())) else {
        return;
    };
    let disabled = DisableGuard::new(&dialog.confirm_button);

    let page = Rc::clone(page);
    spawn_local(async move {
        let result = match page.csrf_token(None) {
            Some(csrf) => api::delete_comment(&target.url, &csrf).await,
            None => Err(UiError::MissingCsrfToken),
        };
        drop(guard);
        drop(disabled);

        let deleted = result.and_then(|resp| {
            if resp.success {
                Ok(())
            } else {
                Err(UiError::Server(resp.error.unwrap_or_else(|| "unknown error".to_string())))
            }
        });
        match deleted {
            Ok(()) => remove_comment(&page, &target),
            Err(e) => log::error!("[delete] deleting via {} failed: {}", target.url, e),
        }

        if let Some(dialog) = &page.delete_dialog {
            dialog.settle();
        }
    });
}

fn remove_comment(page: &PageController, target: &DeleteTarget) {
    let Some(comment_id) = target.comment_id else {
        log::warn!("[delete] no comment id in {}, leaving the page as is", target.url);
        return;
    };
    match page.doc.get_element_by_id(&PageConfig::comment_element_id(comment_id)) {
        Some(comment) => dom::fade_out_and_remove(&comment, page.config.timings.fade_out_ms),
        None => log::warn!("[delete] #comment-{} is not on the page", comment_id),
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod dom_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::super::fixture::Fixture;
    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const THREAD: &str = r#"
        <div id="comments-container">
            <div id="comment-17">Adiós</div>
            <div id="comment-18">Se queda</div>
        </div>
        <button id="confirmDeleteBtn">Eliminar</button>
    "#;

    fn quick_fades() -> PageConfig {
        let mut config = PageConfig::default();
        config.timings.fade_out_ms = 10;
        config
    }

    #[wasm_bindgen_test]
    async fn test_removes_the_targeted_comment() {
        let fx = Fixture::with_config(THREAD, quick_fades());
        remove_comment(&fx.page, &DeleteTarget::new("/blog/comentario/17/eliminar-ajax/"));

        TimeoutFuture::new(50).await;
        assert!(fx.doc.get_element_by_id("comment-17").is_none());
        assert!(fx.doc.get_element_by_id("comment-18").is_some());
    }

    #[wasm_bindgen_test]
    async fn test_url_without_id_keeps_every_comment() {
        let fx = Fixture::with_config(THREAD, quick_fades());
        remove_comment(&fx.page, &DeleteTarget::new("/blog/comentario/eliminar/"));

        TimeoutFuture::new(50).await;
        assert!(fx.doc.get_element_by_id("comment-17").is_some());
        assert!(fx.doc.get_element_by_id("comment-18").is_some());
    }

    #[wasm_bindgen_test]
    fn test_settling_unbinds_the_target() {
        let fx = Fixture::new(THREAD);
        let dialog = fx.page.delete_dialog.as_ref().unwrap();
        let button: HtmlElement = fx.get("confirmDeleteBtn").dyn_into().unwrap();

        dialog.open(&fx.page, DeleteTarget::new("/blog/comentario/17/eliminar-ajax/"));
        assert!(button.onclick().is_some());
        assert!(dialog.armed.borrow().is_some());

        // reopening for another comment rebinds instead of stacking handlers
        dialog.open(&fx.page, DeleteTarget::new("/blog/comentario/18/eliminar-ajax/"));
        assert!(dialog.armed.borrow().is_some());

        dialog.settle();
        assert!(button.onclick().is_none());
        assert!(dialog.armed.borrow().is_none());
    }

    #[wasm_bindgen_test]
    fn test_open_is_refused_while_the_same_delete_is_in_flight() {
        let fx = Fixture::new(THREAD);
        let dialog = fx.page.delete_dialog.as_ref().unwrap();
        let url = "/blog/comentario/17/eliminar-ajax/";
        let _guard = fx.page.inflight.try_acquire(ActionKey::Delete(url.into())).unwrap();

        dialog.open(&fx.page, DeleteTarget::new(url));
        assert!(dialog.armed.borrow().is_none());
    }
}
