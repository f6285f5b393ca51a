use client::LibraryApi;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdSearch, LdShoppingCart};
use dioxus_free_icons::Icon;
use shared_types::{filter_books, Book, CheckoutRequest, SelectionSet, StarRating};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle,
};

use crate::components::BookCover;
use crate::routes::Route;
use crate::session::use_signed_in_username;

const CATALOG_COLUMNS: usize = 7;

/// Catalog search and checkout.
///
/// The catalog is fetched once; filtering happens locally on every
/// keystroke. The selection survives failed checkouts and is only dropped
/// when the view unmounts.
#[component]
pub fn Search() -> Element {
    let api = use_context::<LibraryApi>();
    let username = use_signed_in_username();
    let mut query = use_signal(String::new);
    let mut selection = use_signal(SelectionSet::new);
    let mut checkout_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let catalog_api = api.clone();
    let catalog = use_resource(move || {
        let api = catalog_api.clone();
        async move { api.catalog().await }
    });

    let handle_checkout = move |_: MouseEvent| {
        checkout_error.set(None);
        let request = match CheckoutRequest::prepare(&selection.read(), username.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(reason = %e, "Checkout not attempted");
                checkout_error.set(Some(e.user_message().to_string()));
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            let result = api.borrow_books(&request).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => checkout_error.set(Some(e.user_message().to_string())),
            }
        });
    };

    let selected = selection.read().len();
    let state = catalog.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }

        div { class: "search-page",
            PageHeader {
                PageTitle { "Search Books" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { navigator().push(Route::Dashboard {}); },
                        Icon { icon: LdArrowLeft, width: 16, height: 16 }
                        "Back to Dashboard"
                    }
                }
            }

            div { class: "search-toolbar",
                div { class: "search-field",
                    Icon { icon: LdSearch, width: 16, height: 16 }
                    Input {
                        id: "catalog-query",
                        placeholder: "Search by title, author, genre or description",
                        value: query(),
                        on_input: move |e: FormEvent| query.set(e.value()),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: handle_checkout,
                    Icon { icon: LdShoppingCart, width: 16, height: 16 }
                    if selected == 0 {
                        "Checkout"
                    } else {
                        "Checkout ({selected})"
                    }
                }
            }

            if let Some(err) = checkout_error() {
                div { class: "search-error", "{err}" }
            }

            match state {
                None => rsx! {
                    p { class: "search-loading", "Loading books..." }
                },
                Some(Err(err)) => rsx! {
                    div { class: "search-error", "{err.user_message()}" }
                },
                Some(Ok(books)) => rsx! {
                    CatalogTable {
                        books,
                        query: query(),
                        selection: selection.read().clone(),
                        on_toggle: move |book: Book| {
                            selection.write().toggle(&book);
                        },
                    }
                },
            }
        }
    }
}

/// Catalog rows matching `query`, with the selection checkboxes.
#[component]
fn CatalogTable(
    books: Vec<Book>,
    query: String,
    selection: SelectionSet,
    on_toggle: EventHandler<Book>,
) -> Element {
    let visible = filter_books(&books, &query);

    rsx! {
        DataTable { class: "catalog-table",
            DataTableHeader {
                DataTableColumn { "" }
                DataTableColumn { "Cover" }
                DataTableColumn { "Title" }
                DataTableColumn { "Author" }
                DataTableColumn { "Genre" }
                DataTableColumn { "Description" }
                DataTableColumn { "Rating" }
            }
            DataTableBody {
                if visible.is_empty() {
                    DataTableEmpty { columns: CATALOG_COLUMNS, "No matching books found" }
                }
                for book in visible.into_iter().cloned() {
                    CatalogRow {
                        key: "{book.id}",
                        selected: selection.contains(&book.id),
                        on_toggle,
                        book,
                    }
                }
            }
        }
    }
}

#[component]
fn CatalogRow(book: Book, selected: bool, on_toggle: EventHandler<Book>) -> Element {
    let checkbox_id = format!("select-{}", book.id);
    let toggled = book.clone();

    rsx! {
        DataTableRow { muted: book.borrowed,
            DataTableCell {
                input {
                    id: "{checkbox_id}",
                    r#type: "checkbox",
                    checked: selected,
                    disabled: book.borrowed,
                    onchange: move |_| on_toggle.call(toggled.clone()),
                }
                if book.borrowed {
                    Badge { variant: BadgeVariant::Availability, "(Borrowed)" }
                }
            }
            DataTableCell {
                BookCover {
                    filename: book.cover_filename.clone(),
                    alt: book.name.clone(),
                }
            }
            DataTableCell { "{book.name}" }
            DataTableCell { "{book.author}" }
            DataTableCell { "{book.genre}" }
            DataTableCell {
                span { class: "catalog-description", "{book.description}" }
            }
            DataTableCell {
                RatingStars { rating: book.rating }
            }
        }
    }
}

/// Five-slot star display with the numeric value, or "No rating".
#[component]
pub fn RatingStars(rating: Option<f64>) -> Element {
    let Some(value) = rating else {
        return rsx! {
            span { class: "rating rating-none", "No rating" }
        };
    };
    let stars = StarRating::new(value);

    rsx! {
        span { class: "rating",
            for (i, star) in stars.stars.iter().enumerate() {
                span { key: "{i}", class: "rating-star", "{star.glyph()}" }
            }
            span { class: "rating-label", "{stars.label()}" }
        }
    }
}
