//! Delete Targets
//!
//! The comment id comes from the delete endpoint path, e.g.
//! `/blog/comentario/17/eliminar-ajax/`.

use std::sync::OnceLock;

use regex::Regex;

static ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn id_pattern() -> &'static Regex {
    ID_PATTERN.get_or_init(|| {
        Regex::new(r"/(\d+)/[^?#]*(?:eliminar|delete)").expect("delete id pattern is valid")
    })
}

/// A comment awaiting delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub url: String,
    /// `None` when the URL does not follow the `.../<id>/...delete...` shape
    pub comment_id: Option<u32>,
}

impl DeleteTarget {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let comment_id = comment_id_from_url(&url);
        Self { url, comment_id }
    }
}

pub fn comment_id_from_url(url: &str) -> Option<u32> {
    id_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_route() {
        assert_eq!(comment_id_from_url("/blog/comentario/17/eliminar-ajax/"), Some(17));
    }

    #[test]
    fn test_english_route_and_absolute_url() {
        assert_eq!(comment_id_from_url("https://example.com/comments/305/delete/"), Some(305));
    }

    #[test]
    fn test_unmatched_urls() {
        assert_eq!(comment_id_from_url("/blog/comentario/eliminar/"), None);
        assert_eq!(comment_id_from_url("/blog/comentario/17/editar-ajax/"), None);
        assert_eq!(comment_id_from_url("/blog/comentario/17/?next=eliminar"), None);
    }

    #[test]
    fn test_target_keeps_url() {
        let target = DeleteTarget::new("/blog/comentario/3/eliminar-ajax/");
        assert_eq!(target.comment_id, Some(3));
        assert_eq!(target.url, "/blog/comentario/3/eliminar-ajax/");
    }
}
