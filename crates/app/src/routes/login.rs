use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;
use shared_types::StorageScope;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Label,
};

use client::LibraryApi;

use crate::routes::Route;
use crate::session::use_vault;

const FORGOT_PASSWORD_NOTICE: &str = "Forgot password feature coming soon";

/// Login page. A successful login stores the session in the scope picked by
/// "Remember me" and sends admins to `/admin`, everyone else to `/dashboard`.
#[component]
pub fn Login() -> Element {
    let api = use_context::<LibraryApi>();
    let vault = use_vault();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        let vault = vault.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            notice.set(None);

            let result = api.login(&username(), &password()).await;
            loading.set(false);

            match result {
                Ok(session) => {
                    let scope = StorageScope::from_remember_me(remember_me());
                    if let Err(e) = vault.save(&session, scope) {
                        tracing::error!(error = %e, "Could not store session");
                        error_msg.set(Some(e.user_message().to_string()));
                        return;
                    }
                    if session.is_admin {
                        navigator().push(Route::Admin {});
                    } else {
                        navigator().push(Route::Dashboard {});
                    }
                }
                Err(e) => error_msg.set(Some(e.user_message().to_string())),
            }
        }
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card {
                class: "login-card",

                CardHeader {
                    CardTitle { "Library Login" }
                    CardDescription { "Sign in with your library account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "login-error", "{err}" }
                    }
                    if let Some(msg) = notice() {
                        div { class: "login-notice", "{msg}" }
                    }

                    form { class: "login-form", onsubmit: handle_login,
                        Input {
                            id: "username",
                            label: "Username",
                            placeholder: "Enter your username",
                            autocomplete: "username",
                            required: true,
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }

                        div { class: "login-password",
                            Input {
                                id: "password",
                                label: "Password",
                                input_type: "{password_type}",
                                placeholder: "Enter your password",
                                autocomplete: "current-password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            button {
                                r#type: "button",
                                class: "login-visibility-toggle",
                                aria_label: if show_password() { "Hide password" } else { "Show password" },
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() {
                                    Icon { icon: LdEyeOff, width: 18, height: 18 }
                                } else {
                                    Icon { icon: LdEye, width: 18, height: 18 }
                                }
                            }
                        }

                        div { class: "login-options",
                            div { class: "login-remember",
                                input {
                                    id: "remember-me",
                                    r#type: "checkbox",
                                    checked: remember_me(),
                                    onchange: move |e: FormEvent| remember_me.set(e.checked()),
                                }
                                Label { html_for: "remember-me", "Remember me" }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| notice.set(Some(FORGOT_PASSWORD_NOTICE.to_string())),
                                "Forgot Password?"
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: loading(),
                            class: "login-submit",
                            if loading() { "Logging in..." } else { "Login" }
                        }
                    }
                }

                CardFooter {
                    p { class: "login-footer", "Need an account? Ask at the front desk." }
                }
            }
        }
    }
}
