//! Reply Forms
//!
//! At most one reply form is open at a time.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::PageController;
use crate::config::PageConfig;
use crate::dom;

/// Hidden flags after toggling `target`: every other form closes, and the
/// target opens only if it was closed.
pub fn toggled_visibility(hidden: &[bool], target: usize) -> Vec<bool> {
    let target_was_hidden = hidden.get(target).copied().unwrap_or(true);
    (0..hidden.len())
        .map(|i| !(i == target && target_was_hidden))
        .collect()
}

fn reply_containers(page: &PageController) -> Vec<Element> {
    let Ok(nodes) = page.doc.query_selector_all(&page.config.reply_container_selector()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn toggle_reply_form(page: &PageController, comment_id: &str) {
    let Some(target) = page.doc.get_element_by_id(&PageConfig::reply_form_id(comment_id)) else {
        log::debug!("[replies] no reply form for comment {}", comment_id);
        return;
    };

    let mut forms = reply_containers(page);
    let index = match forms.iter().position(|f| f.is_same_node(Some(&*target))) {
        Some(index) => index,
        None => {
            forms.push(target.clone());
            forms.len() - 1
        }
    };

    let hidden_class = &page.config.classes.hidden;
    let hidden: Vec<bool> = forms
        .iter()
        .map(|f| f.class_list().contains(hidden_class))
        .collect();

    for (form, now_hidden) in forms.iter().zip(toggled_visibility(&hidden, index)) {
        dom::set_hidden(form, hidden_class, now_hidden);
    }

    if !target.class_list().contains(hidden_class) {
        if let Some(textarea) = dom::query(&target, "textarea").and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
            let _ = textarea.focus();
        }
    }
}

/// Close the reply form container around `element`
pub(super) fn close_enclosing_form(page: &PageController, element: &Element) {
    if let Ok(Some(container)) = element.closest(&page.config.reply_container_selector()) {
        dom::set_hidden(&container, &page.config.classes.hidden, true);
    }
}

/// Where a new reply for `parent_id` is appended
pub(super) fn replies_area(page: &PageController, parent_id: &str) -> Option<Element> {
    let selector = format!(".{}", page.config.classes.replies_area);
    page.doc
        .get_element_by_id(&PageConfig::reply_form_id(parent_id))?
        .parent_element()
        .and_then(|parent| dom::query(&parent, &selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_count(hidden: &[bool]) -> usize {
        hidden.iter().filter(|h| !**h).count()
    }

    #[test]
    fn test_opening_hides_all_others() {
        let next = toggled_visibility(&[false, true, false], 1);
        assert_eq!(next, vec![true, false, true]);
        assert_eq!(visible_count(&next), 1);
    }

    #[test]
    fn test_toggling_open_form_closes_it() {
        let next = toggled_visibility(&[true, false, true], 1);
        assert_eq!(next, vec![true, true, true]);
    }

    #[test]
    fn test_at_most_one_visible_for_any_input() {
        let states = [
            vec![false, false, false],
            vec![true, true, true],
            vec![false, true, false, true],
        ];
        for hidden in states {
            for target in 0..hidden.len() {
                assert!(visible_count(&toggled_visibility(&hidden, target)) <= 1);
            }
        }
    }
}
