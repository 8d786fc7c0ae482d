//! Wire Models
//!
//! JSON bodies sent to and received from the blog server.

use serde::{Deserialize, Serialize};

/// Body for creating a comment or a reply
#[derive(Debug, Serialize)]
pub struct NewCommentBody<'a> {
    pub content: &'a str,
    pub parent_id: &'a str,
}

/// Body for editing a comment
#[derive(Debug, Serialize)]
pub struct EditCommentBody<'a> {
    pub content: &'a str,
}

/// `{success: true, comment_html}` or `{error}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateResponse {
    pub success: bool,
    pub comment_html: Option<String>,
    pub error: Option<String>,
}

/// `{success: true, content_html?}` or `{success: false, error?}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditResponse {
    pub success: bool,
    pub content_html: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LikeResponse {
    pub total_likes: i64,
    pub is_liked: bool,
}

/// `{success: true}` or `{success: false, error?}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteResponse {
    pub success: bool,
    pub error: Option<String>,
}

/// What a comment/reply creation response asks the page to do
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// Insert this server-rendered fragment
    Created(String),
    /// Show this message to the user
    Rejected(String),
    /// Nothing usable in the payload
    Ignored,
}

impl CreateResponse {
    pub fn outcome(self) -> CreateOutcome {
        match self {
            CreateResponse { success: true, comment_html: Some(html), .. } if !html.is_empty() => {
                CreateOutcome::Created(html)
            }
            CreateResponse { error: Some(error), .. } if !error.is_empty() => {
                CreateOutcome::Rejected(error)
            }
            _ => CreateOutcome::Ignored,
        }
    }
}

/// What an edit response asks the page to do
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Replace the comment text; `None` means fall back to the submitted text
    Saved(Option<String>),
    Failed(Option<String>),
}

impl EditResponse {
    pub fn outcome(self) -> EditOutcome {
        if self.success {
            EditOutcome::Saved(self.content_html.filter(|html| !html.is_empty()))
        } else {
            EditOutcome::Failed(self.error.filter(|e| !e.is_empty()))
        }
    }
}
