//! Renderable content shared between the host-independent render contract
//! and the Yew front-end.
//!
//! `Node` is a closed tagged union: a text leaf, an inline element, or an
//! ordered fragment of nodes. Hosts convert it into their own view types.

use serde::{Deserialize, Serialize};

/// Inline elements allowed inside a label. All of them take children, so
/// any `Node::Element` renders its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineTag {
    Span,
    Em,
    Strong,
    B,
    I,
    U,
    S,
    Small,
    Mark,
    Code,
    Kbd,
    Abbr,
    Sub,
    Sup,
}

impl InlineTag {
    pub const ALL: [InlineTag; 14] = [
        InlineTag::Span,
        InlineTag::Em,
        InlineTag::Strong,
        InlineTag::B,
        InlineTag::I,
        InlineTag::U,
        InlineTag::S,
        InlineTag::Small,
        InlineTag::Mark,
        InlineTag::Code,
        InlineTag::Kbd,
        InlineTag::Abbr,
        InlineTag::Sub,
        InlineTag::Sup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InlineTag::Span => "span",
            InlineTag::Em => "em",
            InlineTag::Strong => "strong",
            InlineTag::B => "b",
            InlineTag::I => "i",
            InlineTag::U => "u",
            InlineTag::S => "s",
            InlineTag::Small => "small",
            InlineTag::Mark => "mark",
            InlineTag::Code => "code",
            InlineTag::Kbd => "kbd",
            InlineTag::Abbr => "abbr",
            InlineTag::Sub => "sub",
            InlineTag::Sup => "sup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Text rendered verbatim. Escaping is left to the host.
    Text(String),
    /// An inline element with an optional class string.
    Element {
        tag: InlineTag,
        class: Option<String>,
        children: Vec<Node>,
    },
    /// Ordered sequence of nodes without a wrapping element.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: InlineTag, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            class: None,
            children,
        }
    }

    /// Sets the class of an element. Text and fragments are returned as-is.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        match self {
            Node::Element { tag, children, .. } => Node::Element {
                tag,
                class: Some(class.into()),
                children,
            },
            other => other,
        }
    }

    /// True when the node renders nothing visible: an empty text leaf or a
    /// fragment made only of empty nodes.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Text(text) => text.is_empty(),
            Node::Element { .. } => false,
            Node::Fragment(children) => children.iter().all(Node::is_empty),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}
