use chrono::Utc;
use client::LibraryApi;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdClock, LdLogOut, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{upcoming_due, AppError, BorrowedBook, DueSoon, Recommendation};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::components::BookCover;
use crate::format_helpers::format_long_date;
use crate::routes::Route;
use crate::session::{sign_out, use_signed_in_username, use_vault};

/// Number of skeleton rows shown while the member record loads.
const SKELETON_COUNT: usize = 3;

/// Which date the borrowed-books table shows for every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateColumn {
    #[default]
    Borrowed,
    Due,
}

impl DateColumn {
    pub fn tab_label(&self) -> &'static str {
        match self {
            DateColumn::Borrowed => "Borrowing Dates",
            DateColumn::Due => "Due Dates",
        }
    }

    /// Cell text for `book`, e.g. `Due by: April 21, 2025`.
    pub fn cell_text(&self, book: &BorrowedBook) -> String {
        match self {
            DateColumn::Borrowed => {
                format!("Borrowed on: {}", format_long_date(&book.borrowing_date))
            }
            DateColumn::Due => format!("Due by: {}", format_long_date(&book.due_date)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct DashboardData {
    books: Vec<BorrowedBook>,
    recommendations: Vec<Recommendation>,
}

/// Member dashboard. Without a stored username it sends the visitor back to
/// the login page and renders nothing.
#[component]
pub fn Dashboard() -> Element {
    let username = use_signed_in_username();

    match username {
        Some(username) => rsx! { DashboardBody { username } },
        None => {
            tracing::debug!("No stored session, returning to login");
            navigator().push(Route::Login {});
            rsx! {}
        }
    }
}

#[component]
fn DashboardBody(username: String) -> Element {
    let api = use_context::<LibraryApi>();
    let vault = use_vault();

    let member = username.clone();
    let data = use_resource(move || {
        let api = api.clone();
        let member = member.clone();
        async move {
            let books = api.borrowed_books(&member).await?;
            let recommendations = api.recommendations(&member).await;
            Ok::<_, AppError>(DashboardData {
                books,
                recommendations,
            })
        }
    });

    let state = data.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Welcome {username}!" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| { navigator().push(Route::Search {}); },
                        Icon { icon: LdSearch, width: 16, height: 16 }
                        "Search Books"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| sign_out(&vault),
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            match state {
                None => rsx! {
                    div { class: "dashboard-loading",
                        p { "Loading dashboard..." }
                        Skeleton { rows: SKELETON_COUNT, class: "dashboard-skeleton" }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "dashboard-error", "{err.user_message()}" }
                },
                Some(Ok(data)) => {
                    let upcoming = upcoming_due(&data.books, Utc::now());
                    rsx! {
                        div { class: "dashboard-grid",
                            RecommendationsPanel { recommendations: data.recommendations }
                            BorrowedBooksPanel { books: data.books }
                            UpcomingDuePanel { entries: upcoming }
                        }
                    }
                }
            }
        }
    }
}

/// Suggested titles. Entries have no id, so position is their key.
#[component]
fn RecommendationsPanel(recommendations: Vec<Recommendation>) -> Element {
    rsx! {
        Card { class: "dashboard-panel",
            CardHeader {
                CardTitle { "Recommended for You" }
            }
            CardContent {
                if recommendations.is_empty() {
                    p { class: "dashboard-empty", "No recommendations available" }
                } else {
                    ul { class: "recommendation-list",
                        for (i, rec) in recommendations.iter().enumerate() {
                            li { key: "{i}", class: "recommendation",
                                div { class: "recommendation-title",
                                    Icon { icon: LdBookOpen, width: 16, height: 16 }
                                    strong { "{rec.name}" }
                                }
                                div { class: "recommendation-meta",
                                    span { "{rec.author}" }
                                    Badge { variant: BadgeVariant::Genre, "{rec.genre}" }
                                }
                                if let Some(label) = rec.match_label() {
                                    span { class: "recommendation-match", "{label}" }
                                }
                                if let Some(reason) = rec.reason.as_ref().filter(|r| !r.is_empty()) {
                                    span { class: "recommendation-reason", "({reason})" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Borrowed books with a tab toggle that switches the date column for
/// every row at once.
#[component]
fn BorrowedBooksPanel(books: Vec<BorrowedBook>) -> Element {
    let mut column = use_signal(DateColumn::default);

    rsx! {
        Card { class: "dashboard-panel dashboard-panel-wide",
            CardHeader {
                CardTitle { "Borrowed Books" }
                div { class: "date-tabs",
                    for tab in [DateColumn::Borrowed, DateColumn::Due] {
                        Button {
                            key: "{tab.tab_label()}",
                            variant: ButtonVariant::Outline,
                            active: column() == tab,
                            onclick: move |_| column.set(tab),
                            "{tab.tab_label()}"
                        }
                    }
                }
            }
            CardContent {
                BorrowedBooksTable { books, column: column() }
            }
        }
    }
}

/// Rows are keyed by position: loans whose inventory lookup failed all
/// arrive with an empty id.
#[component]
fn BorrowedBooksTable(books: Vec<BorrowedBook>, column: DateColumn) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Cover" }
                DataTableColumn { "Title" }
                DataTableColumn { "Author" }
                DataTableColumn { "Genre" }
                DataTableColumn { "Date" }
            }
            DataTableBody {
                if books.is_empty() {
                    DataTableEmpty { columns: 5, "No books currently borrowed" }
                }
                for (i, book) in books.iter().enumerate() {
                    DataTableRow { key: "{i}",
                        DataTableCell {
                            BookCover {
                                filename: book.cover_filename.clone(),
                                alt: book.name.clone(),
                            }
                        }
                        DataTableCell { "{book.name}" }
                        DataTableCell { "{book.author}" }
                        DataTableCell { "{book.genre}" }
                        DataTableCell { "{column.cell_text(book)}" }
                    }
                }
            }
        }
    }
}

/// Loans due within the next week, soonest first.
#[component]
pub fn UpcomingDuePanel(entries: Vec<DueSoon>) -> Element {
    rsx! {
        section { class: "dashboard-panel upcoming-due",
            h3 { class: "upcoming-due-title",
                Icon { icon: LdClock, width: 18, height: 18 }
                "Upcoming Due Dates"
            }
            if entries.is_empty() {
                p { class: "dashboard-empty", "No books due in the next 7 days" }
            } else {
                ul { class: "upcoming-due-list",
                    for (i, entry) in entries.iter().enumerate() {
                        li { key: "{i}", class: "upcoming-due-item",
                            span { class: "upcoming-due-summary", "{entry.summary()}" }
                            span { class: "upcoming-due-date", "{format_long_date(&entry.due_date)}" }
                        }
                    }
                }
            }
        }
    }
}
