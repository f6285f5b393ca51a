use dioxus::prelude::*;

/// What a badge marks. Each kind maps to a `data-kind` style hook.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Genre tag next to a title.
    #[default]
    Genre,
    /// Loan status, e.g. "(Borrowed)" in the catalog.
    Availability,
}

impl BadgeVariant {
    fn kind(&self) -> &'static str {
        match self {
            BadgeVariant::Genre => "genre",
            BadgeVariant::Availability => "availability",
        }
    }
}

/// Pill-shaped label for book metadata.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-kind", variant.kind(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
