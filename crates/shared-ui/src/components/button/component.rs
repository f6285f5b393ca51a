use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// A portal button. Renders `type="button"` unless `button_type` says
/// otherwise, so it never submits an enclosing form by accident.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default = false)]
    pub disabled: bool,
    /// Marks the button as the selected member of a toggle group.
    #[props(default = false)]
    pub active: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
        Attribute::new("data-active", props.active.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
