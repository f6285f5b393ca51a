use serde::{Deserialize, Serialize};

use crate::Session;

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body returned by `POST /login`, successful or not.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl LoginResponse {
    /// The session carried by a successful response.
    ///
    /// Falls back to the submitted username when the backend omits it.
    pub fn into_session(self, submitted_username: &str) -> Session {
        Session {
            username: self
                .username
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| submitted_username.to_string()),
            auth_token: self.token.unwrap_or_default(),
            is_admin: self.is_admin,
        }
    }
}

/// Error payload the backend attaches to failed writes.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FailureBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl FailureBody {
    /// `message` when present, otherwise `error`.
    pub fn reason(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|e| !e.trim().is_empty()))
    }
}
