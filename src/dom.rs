//! DOM Helpers
//!
//! Listener binding, fragment parsing and the small visual transitions the
//! page handlers share.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlTemplateElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::config::PageConfig;
use crate::error::Result;

pub type Listener = Closure<dyn FnMut(Event)>;

/// Attach a listener and hand back the closure that keeps it alive
pub fn listener(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<Listener> {
    let cb = Listener::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    Ok(cb)
}

/// Attach a listener for the lifetime of the page
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    listener(target, event, handler)?.forget();
    Ok(())
}

/// Closest `<button>` around the event target
pub fn closest_button(ev: &Event) -> Option<Element> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("button")
        .ok()
        .flatten()
}

pub fn query(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

pub fn content_textarea(form: &Element) -> Option<HtmlTextAreaElement> {
    query(form, r#"textarea[name="content"]"#)?.dyn_into().ok()
}

/// First element of a server-rendered HTML fragment
pub fn parse_fragment(doc: &Document, html: &str) -> Result<Option<Element>> {
    let template: HtmlTemplateElement = doc.create_element("template")?.unchecked_into();
    template.set_inner_html(html.trim());
    Ok(template.content().first_element_child())
}

pub fn set_hidden(element: &Element, hidden_class: &str, hidden: bool) {
    let class_list = element.class_list();
    let _ = if hidden {
        class_list.add_1(hidden_class)
    } else {
        class_list.remove_1(hidden_class)
    };
}

/// Add the transitional class now, then `visible` on the next tick and
/// scroll the element to the middle of the viewport.
pub fn fade_in_and_scroll(element: &Element, config: &PageConfig) {
    let _ = element.class_list().add_1(&config.classes.fade_in);

    let element = element.clone();
    let visible = config.classes.visible.clone();
    let delay = config.timings.fade_in_ms;
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        let _ = element.class_list().add_1(&visible);

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

/// Fade the element to transparent and remove it once the transition ends
pub fn fade_out_and_remove(element: &Element, duration_ms: u32) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("transition", &format!("opacity {}s ease-out", duration_ms as f64 / 1000.0));
        let _ = style.set_property("opacity", "0");
    }

    let element = element.clone();
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        element.remove();
    });
}

pub fn alert(window: &Window, message: &str) {
    if window.alert_with_message(message).is_err() {
        log::warn!("[page] could not show alert: {}", message);
    }
}

pub fn reload(window: &Window) {
    if let Err(e) = window.location().reload() {
        log::error!("[page] reload failed: {:?}", e);
    }
}

/// Disables a button until dropped
pub struct DisableGuard {
    button: Option<HtmlButtonElement>,
}

impl DisableGuard {
    pub fn new(element: &Element) -> Self {
        let button = element.dyn_ref::<HtmlButtonElement>().cloned();
        if let Some(button) = &button {
            button.set_disabled(true);
        }
        Self { button }
    }
}

impl Drop for DisableGuard {
    fn drop(&mut self) {
        if let Some(button) = &self.button {
            button.set_disabled(false);
        }
    }
}
