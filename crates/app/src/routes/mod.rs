pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod search;

use dioxus::prelude::*;

use admin::Admin;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use search::Search;

/// Application routes. No guards: each view checks the stored session
/// itself when it mounts.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/search")]
    Search {},
    #[route("/admin")]
    Admin {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
