//! Properties for the `Label` component.

use yew::prelude::*;

/// Both fields are required; omitting either is rejected by the `html!`
/// macro at compile time.
#[derive(Properties, PartialEq, Clone)]
pub struct LabelProps {
    /// Id of the form control this label describes. Not checked against
    /// the document: a dangling id only loses the association.
    pub html_for: AttrValue,

    /// Body of the label, rendered as given.
    pub children: Children,
}
