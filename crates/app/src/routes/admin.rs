use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdLogOut, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{DirectoryMember, MemberDirectory, PortalConfig};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageActions, PageHeader,
    PageTitle, Separator,
};

use crate::routes::Route;
use crate::session::{sign_out, use_vault};

/// Member directory for administrators: a list on the left, the selected
/// member's record on the right. Makes no network calls.
#[component]
pub fn Admin() -> Element {
    let directory = use_context::<Rc<dyn MemberDirectory>>();
    let config = use_context::<PortalConfig>();
    let vault = use_vault();
    let members = use_hook({
        let directory = directory.clone();
        move || directory.members()
    });
    let mut selected = use_signal(|| Option::<String>::None);

    let current = selected().and_then(|id| directory.find_by_library_id(&id));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Member Directory" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { navigator().push(Route::Login {}); },
                        Icon { icon: LdArrowLeft, width: 16, height: 16 }
                        "Back to Home"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| sign_out(&vault),
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            div { class: "admin-layout",
                Card { class: "admin-members",
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdUsers, width: 18, height: 18 }
                            " Members"
                        }
                    }
                    CardContent {
                        ul { class: "admin-member-list",
                            for member in members.iter() {
                                li {
                                    key: "{member.library_id}",
                                    class: if current.as_ref().is_some_and(|c| c.library_id == member.library_id) {
                                        "admin-member selected"
                                    } else {
                                        "admin-member"
                                    },
                                    onclick: {
                                        let id = member.library_id.clone();
                                        move |_| selected.set(Some(id.clone()))
                                    },
                                    "{member.list_label()}"
                                }
                            }
                        }
                    }
                }

                Card { class: "admin-detail",
                    CardContent {
                        match current {
                            Some(member) => rsx! {
                                MemberDetail { member: member, reveal: config.admin.reveal_credentials }
                            },
                            None => rsx! {
                                p { class: "admin-placeholder", "Select a member to view their details." }
                            },
                        }
                    }
                }
            }
            Separator {}
            p { class: "admin-footnote",
                "Directory entries are read-only. Passwords are "
                if config.admin.reveal_credentials { "shown" } else { "masked" }
                "."
            }
        }
    }
}

/// One member's record with their loans.
#[component]
pub fn MemberDetail(member: DirectoryMember, reveal: bool) -> Element {
    rsx! {
        div { class: "member-detail",
            h2 { class: "member-name", "{member.full_name}" }
            dl { class: "member-fields",
                dt { "Library ID" }
                dd { "{member.library_id}" }
                dt { "Phone" }
                dd { "{member.phone_number}" }
                dt { "Username" }
                dd { "{member.username}" }
                dt { "Password" }
                dd { class: "member-password", "{member.password_display(reveal)}" }
            }
            h3 { class: "member-loans-title", "Borrowed Books" }
            if member.borrowed_books.is_empty() {
                p { class: "member-loans-empty", "No borrowed books." }
            } else {
                table { class: "member-loans",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Renewal Date" }
                        }
                    }
                    tbody {
                        for (i, loan) in member.borrowed_books.iter().enumerate() {
                            tr { key: "{i}",
                                td { "{loan.title}" }
                                td { "{loan.renewal_date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
