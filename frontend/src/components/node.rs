//! Conversion from `common` nodes and markup descriptions to Yew `Html`.

use common::model::label::{LabelProps, Markup, Render};
use common::model::node::Node;
use yew::virtual_dom::{VTag, VText};
use yew::Html;

/// Builds one element from a tag name, ordered attributes and children.
pub fn element_html(
    tag: &'static str,
    attributes: &[(&'static str, String)],
    children: impl IntoIterator<Item = Html>,
) -> Html {
    let mut element = VTag::new(tag);
    for (name, value) in attributes {
        element.add_attribute(*name, value.clone());
    }
    element.add_children(children);
    element.into()
}

/// Converts a node tree into `Html`, preserving order and text as-is.
pub fn node_to_html(node: &Node) -> Html {
    match node {
        Node::Text(text) => VText::new(text.clone()).into(),
        Node::Element {
            tag,
            class,
            children,
        } => {
            let attributes: Vec<(&'static str, String)> =
                class.iter().map(|class| ("class", class.clone())).collect();
            element_html(tag.as_str(), &attributes, children.iter().map(node_to_html))
        }
        Node::Fragment(children) => children.iter().map(node_to_html).collect::<Html>(),
    }
}

pub fn markup_to_html(markup: &Markup) -> Html {
    element_html(
        markup.tag,
        &markup.attributes,
        markup.children.iter().map(node_to_html),
    )
}

/// Renders a label from the host-independent record through `Render`.
pub fn label_from_props(props: &LabelProps) -> Html {
    markup_to_html(&props.render())
}
