use dioxus::prelude::*;
use shared_types::PortalConfig;

/// Cover thumbnail that swaps to the configured default image when the
/// cover file fails to load.
#[component]
pub fn BookCover(filename: Option<String>, alt: String) -> Element {
    let config = use_context::<PortalConfig>();
    let mut failed = use_signal(|| false);

    let src = if failed() {
        config.covers.default_image.clone()
    } else {
        config.covers.cover_url(filename.as_deref())
    };

    rsx! {
        img {
            class: "book-cover",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                if !failed() {
                    tracing::debug!("Cover image failed to load, using default");
                    failed.set(true);
                }
            },
        }
    }
}
