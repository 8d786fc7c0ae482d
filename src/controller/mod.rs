//! Page Interaction Controller
//!
//! Comments, replies, likes, inline edits and deletes on the article detail
//! page, all through background requests.

mod clicks;
mod comments;
mod delete;
mod edit;
mod replies;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::error::Result;
use crate::inflight::InFlight;

use delete::DeleteDialog;
use edit::EditSession;

pub struct PageController {
    config: PageConfig,
    window: Window,
    doc: Document,
    container: Element,
    inflight: InFlight,
    delete_dialog: Option<DeleteDialog>,
    edits: RefCell<HashMap<u32, EditSession>>,
}

impl PageController {
    fn new(window: Window, doc: Document, container: Element, config: PageConfig) -> Self {
        let delete_dialog = DeleteDialog::from_document(&doc, &config);
        Self {
            config,
            window,
            doc,
            container,
            inflight: InFlight::new(),
            delete_dialog,
            edits: RefCell::new(HashMap::new()),
        }
    }

    fn csrf_token(&self, form: Option<&Element>) -> Option<String> {
        crate::csrf::csrf_token(&self.doc, form)
    }
}

/// Wire up every listener on the article page. Pages without the article
/// container are left alone.
pub fn bind(window: &Window, doc: &Document, config: &PageConfig) -> Result<()> {
    let Some(container) = doc.get_element_by_id(&config.ids.container) else {
        log::debug!("[page] no #{} on this page", config.ids.container);
        return Ok(());
    };

    let page = Rc::new(PageController::new(window.clone(), doc.clone(), container, config.clone()));

    comments::attach_main_form_listener(&page)?;
    comments::attach_reply_form_listener(&page)?;
    clicks::attach_click_listener(&page)?;
    delete::attach_dialog_listeners(&page)?;

    log::info!("[page] article interactions ready");
    Ok(())
}
