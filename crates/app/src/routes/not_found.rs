use dioxus::prelude::*;

use crate::routes::Route;

/// Shown for any path the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(path = %path, "Unknown route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing on the shelf at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Login {},
                    class: "not-found-link",
                    "Back to Login"
                }
            }
        }
    }
}
