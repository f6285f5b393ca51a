use dioxus::prelude::*;

/// Top bar of a portal page: a title on the left, actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Container for the header's buttons.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
