use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Divider between the member roster and the selected member's record.
#[component]
pub fn Separator(mut props: prim::SeparatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-separator", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Separator { ..props }
    }
}
