use crate::components::label::Label;
use crate::components::node::label_from_props;
use common::model::label::LabelProps;
use common::model::node::{InlineTag, Node};
use gloo_console::log;
use yew::{html, Component, Context, Html};

/// A form control paired with the content of its label.
pub struct FieldSpec {
    pub id: &'static str,
    pub label: Node,
    pub input_type: &'static str,
}

pub fn sign_in_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            id: "username-input",
            label: Node::text("Username"),
            input_type: "text",
        },
        FieldSpec {
            id: "email",
            label: Node::element(InlineTag::Span, vec![Node::text("Email")]),
            input_type: "email",
        },
        FieldSpec {
            id: "password",
            label: Node::Fragment(vec![
                Node::text("Password "),
                Node::element(InlineTag::Em, vec![Node::text("(required)")]).with_class("text-red-600"),
            ]),
            input_type: "password",
        },
    ]
}

pub struct App {
    fields: Vec<FieldSpec>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            fields: sign_in_fields(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <form class="max-w-sm mx-auto p-4">
                { for self.fields.iter().map(field_row) }
                <div class="mb-4 flex items-center gap-2">
                    <input id="remember-me" type="checkbox" />
                    <Label html_for="remember-me">{"Remember me"}</Label>
                </div>
            </form>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            log!(format!("sign-in form mounted with {} fields", self.fields.len()));
        }
    }
}

fn field_row(field: &FieldSpec) -> Html {
    let label = LabelProps::new(field.label.clone(), field.id);

    html! {
        <div class="mb-4">
            { label_from_props(&label) }
            <input id={field.id} type={field.input_type} class="w-full border rounded px-2 py-1" />
        </div>
    }
}
