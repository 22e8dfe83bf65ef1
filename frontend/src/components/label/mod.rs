//! Styled `<label>` bound to a form control by id.
//!
//! Attributes come from `common::model::label::label_attributes`, the same
//! source the `Render` contract uses, so both paths emit identical labels.

use common::model::label::label_attributes;
use yew::{Component, Context, Html};

use crate::components::node::element_html;

mod props;

pub use props::LabelProps;

pub struct Label;

impl Component for Label {
    type Message = ();
    type Properties = LabelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Label
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        element_html(
            "label",
            &label_attributes(&props.html_for),
            props.children.iter(),
        )
    }
}
