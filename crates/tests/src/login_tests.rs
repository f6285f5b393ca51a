use axum::{http::StatusCode, routing::post, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Session, CONNECTIVITY_MESSAGE};

use crate::common::{self, Recorder};

#[tokio::test]
async fn test_login_success_returns_session() {
    let recorder = Recorder::default();
    let app = Router::new().route(
        "/login",
        common::post_json(
            StatusCode::OK,
            json!({
                "success": true,
                "message": "Login successful",
                "username": "j5sangha",
                "token": "sample-auth-token",
                "isAdmin": false
            }),
            recorder.clone(),
        ),
    );
    let api = common::serve(app).await;

    let session = api.login("j5sangha", "testpassword1!").await.unwrap();

    assert_eq!(
        session,
        Session {
            username: "j5sangha".to_string(),
            auth_token: "sample-auth-token".to_string(),
            is_admin: false,
        }
    );
    assert_eq!(
        recorder.seen(),
        vec![json!({"username": "j5sangha", "password": "testpassword1!"})]
    );
}

#[tokio::test]
async fn test_login_admin_flag() {
    let app = Router::new().route(
        "/login",
        common::post_json(
            StatusCode::OK,
            json!({"success": true, "username": "admin", "token": "t", "isAdmin": true}),
            Recorder::default(),
        ),
    );
    let api = common::serve(app).await;

    let session = api.login("admin", "pw").await.unwrap();
    assert!(session.is_admin);
}

#[tokio::test]
async fn test_login_rejection_uses_backend_message() {
    let app = Router::new().route(
        "/login",
        common::post_json(
            StatusCode::UNAUTHORIZED,
            json!({"success": false, "message": "Invalid username or password"}),
            Recorder::default(),
        ),
    );
    let api = common::serve(app).await;

    let err = api.login("j5sangha", "wrong").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "Invalid username or password");
}

#[tokio::test]
async fn test_login_rejection_without_message_falls_back() {
    let app = Router::new().route(
        "/login",
        common::post_json(
            StatusCode::UNAUTHORIZED,
            json!({"success": false}),
            Recorder::default(),
        ),
    );
    let api = common::serve(app).await;

    let err = api.login("j5sangha", "wrong").await.unwrap_err();
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn test_login_non_json_body_is_connectivity_failure() {
    let app = Router::new().route(
        "/login",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>Bad Gateway</html>") }),
    );
    let api = common::serve(app).await;

    let err = api.login("j5sangha", "pw").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Connectivity);
    assert_eq!(err.message, CONNECTIVITY_MESSAGE);
}

#[tokio::test]
async fn test_login_unreachable_backend() {
    let api = common::unreachable_api().await;

    let err = api.login("j5sangha", "pw").await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to connect to server");
}
