//! Host-independent render contract for a form label.
//!
//! A label is described by `LabelProps` and rendered through the `Render`
//! capability into a `Markup` description. Any host (the Yew front-end,
//! a string renderer) can turn that description into real markup.

use serde::{Deserialize, Serialize};

use crate::model::node::Node;

/// Block display, small font, medium weight, one spacing unit bottom margin.
pub const LABEL_CLASS: &str = "block text-sm font-medium mb-1";

/// Input record for a label. `target_id` should match the id of exactly one
/// control in the same view; it is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelProps {
    pub content: Node,
    pub target_id: String,
}

impl LabelProps {
    pub fn new(content: impl Into<Node>, target_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            target_id: target_id.into(),
        }
    }
}

/// Attributes of a label pointing at `target_id`: `for` then `class`.
pub fn label_attributes(target_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("for", target_id.to_string()),
        ("class", LABEL_CLASS.to_string()),
    ]
}

/// Description of a single rendered element.
#[derive(Debug, Clone, PartialEq)]
pub struct Markup {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Markup {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Something that can be turned into a markup description.
pub trait Render {
    fn render(&self) -> Markup;
}

impl Render for LabelProps {
    fn render(&self) -> Markup {
        Markup {
            tag: "label",
            attributes: label_attributes(&self.target_id),
            children: vec![self.content.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::InlineTag;

    #[test]
    fn text_content() {
        let markup = LabelProps::new("Username", "username-input").render();

        assert_eq!(markup.tag, "label");
        assert_eq!(markup.attribute("for"), Some("username-input"));
        assert_eq!(markup.attribute("class"), Some("block text-sm font-medium mb-1"));
        assert_eq!(markup.children, vec![Node::text("Username")]);
    }

    #[test]
    fn element_content_is_kept_verbatim() {
        let span = Node::element(InlineTag::Span, vec![Node::text("Email")]);
        let markup = LabelProps::new(span.clone(), "email").render();

        assert_eq!(markup.attribute("for"), Some("email"));
        assert_eq!(markup.children, vec![span]);
    }

    #[test]
    fn empty_content() {
        let markup = LabelProps::new("", "x").render();

        assert_eq!(markup.attribute("for"), Some("x"));
        assert!(markup.children.iter().all(Node::is_empty));
    }

    #[test]
    fn class_does_not_depend_on_props() {
        let inputs = [
            LabelProps::new("A", "a"),
            LabelProps::new(
                Node::Fragment(vec!["x".into(), Node::element(InlineTag::B, vec![])]),
                "",
            ),
            LabelProps::new("", "with spaces and \"quotes\""),
        ];
        for props in &inputs {
            let markup = props.render();
            assert_eq!(markup.attribute("class"), Some(LABEL_CLASS));
            assert_eq!(markup.attribute("for"), Some(props.target_id.as_str()));
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let props = LabelProps::new(
            Node::Fragment(vec![
                Node::text("Password "),
                Node::element(InlineTag::Em, vec!["required".into()]),
            ]),
            "password",
        );
        assert_eq!(props.render(), props.render());
    }

    #[test]
    fn label_from_json_renders() {
        let json = r#"{
            "content": {"element": {"tag": "span", "class": null, "children": [{"text": "Email"}]}},
            "target_id": "email"
        }"#;
        let props: LabelProps = serde_json::from_str(json).unwrap();
        let markup = props.render();

        assert_eq!(markup.attribute("for"), Some("email"));
        assert_eq!(
            markup.children,
            vec![Node::element(InlineTag::Span, vec![Node::text("Email")])]
        );
        assert_eq!(serde_json::to_value(&props).unwrap()["target_id"], "email");
    }
}
