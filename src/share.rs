//! Share Button
//!
//! Copies the current page URL to the clipboard and shows a short toast.

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Window};

use crate::bootstrap::Toast;
use crate::config::PageConfig;
use crate::dom;
use crate::error::{Result, UiError};

async fn copy_page_url(window: &Window) -> Result<()> {
    let href = window.location().href()?;
    let promise = window.navigator().clipboard().write_text(&href);
    JsFuture::from(promise).await.map_err(UiError::from)?;
    Ok(())
}

pub fn bind_share_button(window: &Window, doc: &Document, config: &PageConfig) -> Result<()> {
    let Some(button) = doc.get_element_by_id(&config.ids.share_button) else {
        return Ok(());
    };

    let window = window.clone();
    let toast_el = doc.get_element_by_id(&config.ids.share_toast);
    let delay = config.timings.toast_delay_ms;

    dom::listen(&button, "click", move |_| {
        let window = window.clone();
        let toast_el = toast_el.clone();
        spawn_local(async move {
            match copy_page_url(&window).await {
                Ok(()) => {
                    if let Some(toast) = toast_el.as_ref().and_then(|el| Toast::attach(el, delay)) {
                        toast.show();
                    }
                }
                Err(e) => log::error!("[share] Error copying link: {}", e),
            }
        });
    })
}
