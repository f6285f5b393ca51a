use dioxus::prelude::*;

/// Prepends `class` to the caller's attributes so extra classes merge in.
fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Raised panel holding one dashboard section, the login form, or the
/// not-found notice.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged, {children} }
    }
}

/// Top strip of a panel: its heading plus any tab toggles.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Panel heading, e.g. "Borrowed Books".
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-title", attributes);
    rsx! {
        h3 { ..merged, {children} }
    }
}

/// Muted line under the heading.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-description", attributes);
    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-content", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Ruled-off strip for secondary links such as "Forgot password?".
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}
