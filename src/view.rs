//! Declarative DOM Nodes
//!
//! Small node tree for markup built on the client. Text is always inserted as
//! text nodes, never parsed as HTML.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(El),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct El {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

pub fn el(tag: &'static str) -> El {
    El { tag, ..Default::default() }
}

pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl El {
    /// Space-separated class list
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn render(&self, doc: &Document) -> Result<Element, JsValue> {
        let element = doc.create_element(self.tag)?;
        if !self.classes.is_empty() {
            element.set_class_name(&self.classes.join(" "));
        }
        for (name, value) in &self.attrs {
            element.set_attribute(name, value)?;
        }
        for child in &self.children {
            match child {
                Node::Element(e) => {
                    let child = e.render(doc)?;
                    element.append_child(&child)?;
                }
                Node::Text(t) => {
                    element.append_child(&doc.create_text_node(t))?;
                }
            }
        }
        Ok(element)
    }
}

/// Tree queries for asserting on built markup
#[cfg(test)]
impl El {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&El> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(e) => e.find_by_class(class),
            Node::Text(_) => None,
        })
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&El> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(e) => e.find_by_tag(tag),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(|child| match child {
                Node::Element(e) => e.text_content(),
                Node::Text(t) => t.clone(),
            })
            .collect()
    }
}

impl From<El> for Node {
    fn from(e: El) -> Self {
        Node::Element(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let tree = el("div")
            .class("d-flex  gap-2")
            .attr("role", "group")
            .child(el("span").child(text("a")))
            .child(text("b"));

        assert_eq!(tree.classes, vec!["d-flex", "gap-2"]);
        assert_eq!(tree.get_attr("role"), Some("group"));
        assert_eq!(tree.text_content(), "ab");
        assert_eq!(tree.find_by_tag("span").map(|s| s.text_content()), Some("a".to_string()));
    }

    #[test]
    fn test_markup_stays_text() {
        let tree = el("p").child(text("<script>alert(1)</script>"));
        assert_eq!(tree.children, vec![Node::Text("<script>alert(1)</script>".into())]);
        assert!(tree.find_by_tag("script").is_none());
    }
}
