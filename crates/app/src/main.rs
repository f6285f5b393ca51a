use std::rc::Rc;

use client::{portal_config, session_vault, BuiltinDirectory, LibraryApi};
use dioxus::prelude::*;
use shared_types::MemberDirectory;

mod components;
mod format_helpers;
mod routes;
mod session;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Root component. Everything a view needs from outside itself arrives
/// through context: the backend client, the session vault, the member
/// directory and the portal configuration.
#[component]
fn App() -> Element {
    let config = portal_config();
    tracing::debug!(backend = config.api_base(), "Portal starting");

    use_context_provider(|| LibraryApi::from_config(config));
    use_context_provider(session_vault);
    use_context_provider(|| Rc::new(BuiltinDirectory) as Rc<dyn MemberDirectory>);
    use_context_provider(|| config.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
