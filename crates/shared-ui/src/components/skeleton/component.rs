use dioxus::prelude::*;

/// Stack of pulsing bars standing in for rows that are still loading.
///
/// Extra attributes land on the stack; size individual bars from CSS via
/// `.your-class .skeleton`.
#[component]
pub fn Skeleton(
    #[props(default = 1)] rows: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton-stack", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for i in 0..rows {
                div { key: "{i}", class: "skeleton" }
            }
        }
    }
}
