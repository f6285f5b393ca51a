//! Calls to the library backend.
//!
//! Every function resolves to either the normalized view model or an
//! [`AppError`] whose message can be shown verbatim. Nothing here retries or
//! times out; a failed call is final for the view that issued it.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::{
    AppError, Book, BorrowedBook, CatalogResponse, CheckoutRequest, FailureBody, LoginRequest,
    LoginResponse, PortalConfig, Recommendation, Session, UserRecordResponse,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const BORROW_FAILED: &str = "Error borrowing books";

/// HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct LibraryApi {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for LibraryApi {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl LibraryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.api_base())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, prefix: &str, username: &str) -> String {
        self.url(&format!("{}/{}", prefix, urlencoding::encode(username)))
    }

    /// `POST /login`. The body is read whatever the status code, since the
    /// backend reports bad credentials as `401` with `{success: false}`.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/login"))
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_failure("/login", e))?;
        let body: LoginResponse = decode(response, "/login").await?;

        if body.success {
            let session = body.into_session(username);
            tracing::info!(username = %session.username, is_admin = session.is_admin, "Login succeeded");
            Ok(session)
        } else {
            tracing::warn!(username = username, "Login rejected");
            Err(AppError::rejected_or(body.message, INVALID_CREDENTIALS))
        }
    }

    /// `GET /get-user/{username}`, reduced to the member's normalized loans.
    #[tracing::instrument(skip(self))]
    pub async fn borrowed_books(&self, username: &str) -> Result<Vec<BorrowedBook>, AppError> {
        let url = self.user_url("/get-user", username);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_failure("/get-user", e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "User record request failed");
            return Err(status_failure(status));
        }

        let body: UserRecordResponse = decode(response, "/get-user").await?;
        if let Some(error) = body.error.clone().filter(|e| !e.is_empty()) {
            return Err(AppError::rejected(error));
        }
        Ok(body.into_borrowed_books())
    }

    /// `GET /recommendations/{username}`.
    ///
    /// Recommendations are supplementary: any failure yields an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn recommendations(&self, username: &str) -> Vec<Recommendation> {
        let url = self.user_url("/recommendations", username);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Recommendations unreachable, showing none");
                return Vec::new();
            }
        };
        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                "No recommendations found, showing none"
            );
            return Vec::new();
        }
        match response.json::<Vec<Recommendation>>().await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "Recommendations body unreadable, showing none");
                Vec::new()
            }
        }
    }

    /// `GET /get-books-with-status`: the whole catalog with borrowed flags.
    #[tracing::instrument(skip(self))]
    pub async fn catalog(&self) -> Result<Vec<Book>, AppError> {
        let response = self
            .http
            .get(self.url("/get-books-with-status"))
            .send()
            .await
            .map_err(|e| transport_failure("/get-books-with-status", e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<FailureBody>()
                .await
                .ok()
                .and_then(FailureBody::reason);
            return Err(match reason {
                Some(reason) => AppError::rejected(reason),
                None => status_failure(status),
            });
        }

        let body: CatalogResponse = decode(response, "/get-books-with-status").await?;
        tracing::debug!(count = body.books.len(), "Catalog loaded");
        Ok(body.books)
    }

    /// `POST /borrow-books`. Any 2xx counts as success.
    #[tracing::instrument(skip(self, request), fields(username = %request.username, count = request.book_ids.len()))]
    pub async fn borrow_books(&self, request: &CheckoutRequest) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.url("/borrow-books"))
            .json(request)
            .send()
            .await
            .map_err(|e| transport_failure("/borrow-books", e))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Checkout accepted");
            return Ok(());
        }

        let reason = response
            .json::<FailureBody>()
            .await
            .ok()
            .and_then(FailureBody::reason);
        tracing::warn!(status = status.as_u16(), reason = ?reason, "Checkout refused");
        Err(AppError::rejected_or(reason, BORROW_FAILED))
    }
}

async fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|e| transport_failure(endpoint, e))
}

fn transport_failure(endpoint: &str, err: reqwest::Error) -> AppError {
    tracing::error!(endpoint = endpoint, error = %err, "Backend request failed");
    AppError::unreachable()
}

fn status_failure(status: StatusCode) -> AppError {
    AppError::rejected(format!("Failed with status {}", status.as_u16()))
}
