//! Password Visibility Toggle
//!
//! `#togglePassword` flips `#id_password` between masked and plain text and
//! swaps the eye icon. Enter and Space on the toggle behave like a click.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::config::PageConfig;
use crate::dom;
use crate::error::Result;
use crate::view::el;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Masked,
    Plain,
}

impl Visibility {
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == "password" {
            Visibility::Masked
        } else {
            Visibility::Plain
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Plain,
            Visibility::Plain => Visibility::Masked,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Masked => "password",
            Visibility::Plain => "text",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Visibility::Masked => "bi bi-eye",
            Visibility::Plain => "bi bi-eye-slash",
        }
    }
}

pub fn is_toggle_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

fn toggle(doc: &Document, button: &Element, field: &HtmlInputElement) {
    let next = Visibility::from_input_type(&field.type_()).toggled();
    field.set_type(next.input_type());

    match el("i").class(next.icon_class()).render(doc) {
        Ok(icon) => {
            button.set_text_content(None);
            let _ = button.append_child(&icon);
        }
        Err(e) => log::error!("[password] failed to render icon: {:?}", e),
    }
}

pub fn bind_password_toggle(doc: &Document, config: &PageConfig) -> Result<()> {
    let (Some(button), Some(field)) = (
        doc.get_element_by_id(&config.ids.password_toggle),
        doc.get_element_by_id(&config.ids.password_field)
            .and_then(|f| f.dyn_into::<HtmlInputElement>().ok()),
    ) else {
        return Ok(());
    };

    {
        let doc = doc.clone();
        let btn = button.clone();
        dom::listen(&button, "click", move |_| toggle(&doc, &btn, &field))?;
    }

    let btn = button.clone();
    dom::listen(&button, "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_toggle_key(&key_ev.key()) {
            ev.prevent_default();
            if let Some(html) = btn.dyn_ref::<HtmlElement>() {
                html.click();
            }
        }
    })?;

    Ok(())
}


#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod dom_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn icon_class(button: &Element) -> String {
        button.query_selector("i").unwrap().unwrap().class_name()
    }

    #[wasm_bindgen_test]
    fn test_type_and_icon_change_together() {
        let doc = web_sys::window().unwrap().document().unwrap();
        let button = doc.create_element("button").unwrap();
        let field: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        field.set_type("password");

        toggle(&doc, &button, &field);
        assert_eq!(field.type_(), "text");
        assert_eq!(icon_class(&button), "bi bi-eye-slash");

        toggle(&doc, &button, &field);
        assert_eq!(field.type_(), "password");
        assert_eq!(icon_class(&button), "bi bi-eye");
        assert_eq!(button.child_element_count(), 1);
    }
}
