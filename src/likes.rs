//! Like Rendering
//!
//! Count and heart icon always mirror the last server response.

use web_sys::Element;

use crate::models::LikeResponse;

const LIKED_CLASSES: &[&str] = &["fas", "fa-heart", "text-danger"];
const UNLIKED_CLASSES: &[&str] = &["far", "fa-heart"];

/// Classes to remove and then add on the heart icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconChange {
    pub remove: &'static [&'static str],
    pub add: &'static [&'static str],
}

pub fn icon_change(is_liked: bool) -> IconChange {
    if is_liked {
        IconChange { remove: &["far", "fa-heart"], add: LIKED_CLASSES }
    } else {
        IconChange { remove: LIKED_CLASSES, add: UNLIKED_CLASSES }
    }
}

impl IconChange {
    /// New class list; classes the change does not touch keep their order
    pub fn apply_to(&self, classes: &[String]) -> Vec<String> {
        let mut out: Vec<String> = classes
            .iter()
            .filter(|c| !self.remove.contains(&c.as_str()))
            .cloned()
            .collect();
        for class in self.add {
            if !out.iter().any(|c| c == class) {
                out.push(class.to_string());
            }
        }
        out
    }
}

fn class_names(element: &Element) -> Vec<String> {
    element.class_name().split_whitespace().map(str::to_string).collect()
}

pub fn update_like_ui(count: Option<&Element>, icon: Option<&Element>, like: LikeResponse) {
    if let Some(count) = count {
        count.set_text_content(Some(&like.total_likes.to_string()));
    }
    if let Some(icon) = icon {
        let next = icon_change(like.is_liked).apply_to(&class_names(icon));
        icon.set_class_name(&next.join(" "));
    }
}


#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod dom_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(tag: &str, class: &str) -> Element {
        let doc = web_sys::window().unwrap().document().unwrap();
        let el = doc.create_element(tag).unwrap();
        el.set_class_name(class);
        el
    }

    #[wasm_bindgen_test]
    fn test_update_like_ui_follows_response() {
        let count = element("span", "comment-like-count");
        let icon = element("i", "far fa-heart me-1");

        update_like_ui(Some(&count), Some(&icon), LikeResponse { total_likes: 5, is_liked: true });
        assert_eq!(count.text_content().as_deref(), Some("5"));
        let list = icon.class_list();
        assert!(list.contains("fas") && list.contains("fa-heart") && list.contains("text-danger"));
        assert!(!list.contains("far"));
        assert!(list.contains("me-1"));

        update_like_ui(Some(&count), Some(&icon), LikeResponse { total_likes: 4, is_liked: false });
        assert_eq!(count.text_content().as_deref(), Some("4"));
        let list = icon.class_list();
        assert!(list.contains("far") && list.contains("fa-heart"));
        assert!(!list.contains("fas") && !list.contains("text-danger"));
    }

    #[wasm_bindgen_test]
    fn test_missing_nodes_are_skipped() {
        let count = element("span", "");
        update_like_ui(Some(&count), None, LikeResponse { total_likes: 1, is_liked: true });
        assert_eq!(count.text_content().as_deref(), Some("1"));
    }
}
