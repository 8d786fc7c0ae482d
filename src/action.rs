//! Button Actions
//!
//! A clicked button is resolved once into a typed [`Action`], either from an
//! explicit `data-action` attribute or from the template's class/id markers.

use web_sys::Element;

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    LikeArticle,
    LikeComment,
    Reply,
    CancelReply,
    Edit,
    Delete,
}

impl ActionKind {
    /// Parse a `data-action` value
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "like-article" => Some(Self::LikeArticle),
            "like-comment" => Some(Self::LikeComment),
            "reply" => Some(Self::Reply),
            "cancel-reply" => Some(Self::CancelReply),
            "edit" => Some(Self::Edit),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Dispatchable action with the data it needs from the button
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LikeArticle { url: String },
    LikeComment { url: String },
    Reply { comment_id: String },
    CancelReply,
    Edit { comment_id: u32, content: String, url: String },
    Delete { url: String },
}

/// The attributes of a button that dispatch reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonSnapshot {
    pub id: String,
    pub classes: Vec<String>,
    pub action: Option<String>,
    pub url: Option<String>,
    pub comment_id: Option<String>,
    pub data_id: Option<String>,
    pub content: Option<String>,
}

impl ButtonSnapshot {
    pub fn from_element(button: &Element) -> Self {
        let class_list = button.class_list();
        let classes = (0..class_list.length())
            .filter_map(|i| class_list.item(i))
            .collect();

        Self {
            id: button.id(),
            classes,
            action: button.get_attribute("data-action"),
            url: button.get_attribute("data-url"),
            comment_id: button.get_attribute("data-comment-id"),
            data_id: button.get_attribute("data-id"),
            content: button.get_attribute("data-content"),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn kind(&self, config: &PageConfig) -> Option<ActionKind> {
        if let Some(kind) = self.action.as_deref().and_then(ActionKind::from_attr) {
            return Some(kind);
        }

        let classes = &config.classes;
        if self.id == config.ids.article_like_button {
            Some(ActionKind::LikeArticle)
        } else if self.has_class(&classes.comment_like_button) {
            Some(ActionKind::LikeComment)
        } else if self.has_class(&classes.reply_button) {
            Some(ActionKind::Reply)
        } else if self.has_class(&classes.cancel_reply) {
            Some(ActionKind::CancelReply)
        } else if self.has_class(&classes.edit_button) {
            Some(ActionKind::Edit)
        } else if self.has_class(&classes.delete_button) {
            Some(ActionKind::Delete)
        } else {
            None
        }
    }
}

impl Action {
    /// Resolve a button into an action. Buttons without a marker, or missing
    /// the data their action needs, resolve to `None`.
    pub fn resolve(button: &ButtonSnapshot, config: &PageConfig) -> Option<Self> {
        let kind = button.kind(config)?;
        let url = button.url.clone().filter(|u| !u.is_empty());

        let action = match kind {
            ActionKind::LikeArticle => Action::LikeArticle { url: url? },
            ActionKind::LikeComment => Action::LikeComment { url: url? },
            ActionKind::Reply => Action::Reply {
                comment_id: button.comment_id.clone().filter(|id| !id.is_empty())?,
            },
            ActionKind::CancelReply => Action::CancelReply,
            ActionKind::Edit => Action::Edit {
                comment_id: button.data_id.as_deref()?.trim().parse().ok()?,
                content: button.content.clone().unwrap_or_default(),
                url: url?,
            },
            ActionKind::Delete => Action::Delete { url: url? },
        };
        Some(action)
    }
}
