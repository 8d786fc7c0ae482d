//! Page Configuration
//!
//! Element ids, class markers, labels and timings used by the page scripts.
//! Defaults match the server templates; a page can override any subset with
//! a JSON block `<script type="application/json" id="page-interactions-config">`.

use serde::Deserialize;

/// Id of the optional JSON block holding overrides
pub const CONFIG_ELEMENT_ID: &str = "page-interactions-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub ids: ElementIds,
    pub classes: ClassMarkers,
    pub labels: Labels,
    pub timings: Timings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub container: String,
    pub main_comment_form: String,
    pub comments_container: String,
    pub article_like_button: String,
    pub article_like_count: String,
    pub delete_modal: String,
    pub delete_confirm_button: String,
    pub share_button: String,
    pub share_toast: String,
    pub password_toggle: String,
    pub password_field: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassMarkers {
    pub comment_like_button: String,
    pub comment_like_count: String,
    pub reply_button: String,
    pub cancel_reply: String,
    pub edit_button: String,
    pub delete_button: String,
    pub reply_form: String,
    pub reply_form_container: String,
    pub replies_area: String,
    pub comment_text: String,
    pub edit_controls: String,
    pub hidden: String,
    pub fade_in: String,
    pub visible: String,
    pub truncate: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub show_more: String,
    pub show_less: String,
    pub save: String,
    pub cancel: String,
    pub edit_failed: String,
}

/// Durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
    pub toast_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ids: ElementIds::default(),
            classes: ClassMarkers::default(),
            labels: Labels::default(),
            timings: Timings::default(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            container: "article-detail-container".to_string(),
            main_comment_form: "main-comment-form".to_string(),
            comments_container: "comments-container".to_string(),
            article_like_button: "like-button".to_string(),
            article_like_count: "like-count".to_string(),
            delete_modal: "confirmDeleteModal".to_string(),
            delete_confirm_button: "confirmDeleteBtn".to_string(),
            share_button: "shareBtn".to_string(),
            share_toast: "shareToast".to_string(),
            password_toggle: "togglePassword".to_string(),
            password_field: "id_password".to_string(),
        }
    }
}

impl Default for ClassMarkers {
    fn default() -> Self {
        Self {
            comment_like_button: "comment-like-btn".to_string(),
            comment_like_count: "comment-like-count".to_string(),
            reply_button: "reply-btn".to_string(),
            cancel_reply: "cancel-reply".to_string(),
            edit_button: "edit-btn".to_string(),
            delete_button: "delete-btn".to_string(),
            reply_form: "reply-form-wrapper".to_string(),
            reply_form_container: "reply-form-container".to_string(),
            replies_area: "replies-divider".to_string(),
            comment_text: "comment-text".to_string(),
            edit_controls: "edit-controls".to_string(),
            hidden: "d-none".to_string(),
            fade_in: "fade-in-comment".to_string(),
            visible: "visible".to_string(),
            truncate: "truncate-text".to_string(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show_more: "Ver más".to_string(),
            show_less: "Ver menos".to_string(),
            save: "Guardar".to_string(),
            cancel: "Cancelar".to_string(),
            edit_failed: "Error al editar el comentario.".to_string(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fade_in_ms: 100,
            fade_out_ms: 400,
            toast_delay_ms: 2000,
        }
    }
}

impl PageConfig {
    /// Parse overrides on top of the defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the embedded JSON block, falling back to defaults when it is
    /// missing or malformed.
    pub fn load(doc: &web_sys::Document) -> Self {
        let Some(raw) = doc
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[config] ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Selector for every open or closed reply form container
    pub fn reply_container_selector(&self) -> String {
        format!(".{}", self.classes.reply_form_container)
    }

    pub fn comment_element_id(comment_id: u32) -> String {
        format!("comment-{}", comment_id)
    }

    pub fn reply_form_id(parent_id: &str) -> String {
        format!("reply-form-{}", parent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_templates() {
        let config = PageConfig::default();
        assert_eq!(config.ids.container, "article-detail-container");
        assert_eq!(config.classes.hidden, "d-none");
        assert_eq!(config.labels.show_more, "Ver más");
        assert_eq!(config.timings.toast_delay_ms, 2000);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{"log_level": "debug", "labels": {"show_more": "Read more"}, "timings": {"fade_out_ms": 250}}"#,
        )
        .unwrap();

        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.labels.show_more, "Read more");
        assert_eq!(config.labels.show_less, "Ver menos");
        assert_eq!(config.timings.fade_out_ms, 250);
        assert_eq!(config.timings.fade_in_ms, 100);
        assert_eq!(config.ids, ElementIds::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = PageConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_element_id_patterns() {
        assert_eq!(PageConfig::comment_element_id(42), "comment-42");
        assert_eq!(PageConfig::reply_form_id("7"), "reply-form-7");
    }
}
