use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown whenever the backend cannot be reached or answers with
/// something that is not the expected JSON.
pub const CONNECTIVITY_MESSAGE: &str = "Failed to connect to server";

/// Categorization of portal errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Network unreachable or an undecodable response body.
    Connectivity,
    /// The backend answered but refused the request.
    Rejected,
    /// A local precondition (logged-in user, non-empty selection) is missing.
    Precondition,
    /// Browser storage is unavailable or refused a write.
    Storage,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Connectivity => write!(f, "Connectivity"),
            AppErrorKind::Rejected => write!(f, "Rejected"),
            AppErrorKind::Precondition => write!(f, "Precondition"),
            AppErrorKind::Storage => write!(f, "Storage"),
        }
    }
}

/// Structured error used by the client and every view.
///
/// Views never propagate these further: each one turns the error into local
/// message state and renders [`AppError::message`] verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Connectivity,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Rejected,
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Precondition,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Storage,
            message: message.into(),
        }
    }

    /// Generic transport failure carrying [`CONNECTIVITY_MESSAGE`].
    pub fn unreachable() -> Self {
        Self::connectivity(CONNECTIVITY_MESSAGE)
    }

    /// Build a rejection from an optional backend-supplied message, using
    /// `fallback` when the backend sent nothing usable.
    pub fn rejected_or(message: Option<String>, fallback: &str) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::rejected(message)
    }

    /// Text shown to the user.
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
