use axum::{http::StatusCode, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{filter_books, AppErrorKind};

use crate::common;

fn catalog_app(status: StatusCode, body: serde_json::Value) -> Router {
    Router::new().route("/get-books-with-status", common::get_json(status, body))
}

#[tokio::test]
async fn test_catalog_loads_with_borrowed_flags() {
    let app = catalog_app(
        StatusCode::OK,
        json!({
            "books": [
                {"_id": "1", "name": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi",
                 "description": "Desert planet politics", "cover_filename": "dune.jpg",
                 "rating": 4.5, "borrowed": false},
                {"_id": "2", "name": "Slam Dunk Vol. 12", "author": "Takehiko Inoue",
                 "genre": "Manga", "description": "Basketball", "cover_filename": "",
                 "borrowed": true},
                {"_id": "3", "name": "Look Back", "author": "Tatsuki Fujimoto",
                 "genre": "Manga", "description": "Two artists", "rating": null}
            ]
        }),
    );
    let api = common::serve(app).await;

    let books = api.catalog().await.unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books[0].id, "1");
    assert_eq!(books[0].rating, Some(4.5));
    assert!(books[1].borrowed);
    assert_eq!(books[1].cover_filename, None);
    assert!(!books[2].borrowed);
    assert_eq!(books[2].rating, None);

    let manga: Vec<&str> = filter_books(&books, "manga")
        .into_iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(manga, vec!["Slam Dunk Vol. 12", "Look Back"]);
    assert!(filter_books(&books, "zzz").is_empty());
    assert_eq!(filter_books(&books, "").len(), 3);
}

#[tokio::test]
async fn test_catalog_failure_reports_backend_error() {
    let api = common::serve(catalog_app(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "Database unavailable"}),
    ))
    .await;

    let err = api.catalog().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "Database unavailable");
}

#[tokio::test]
async fn test_catalog_failure_without_body_reports_status() {
    let api = common::serve(catalog_app(StatusCode::SERVICE_UNAVAILABLE, json!({}))).await;

    let err = api.catalog().await.unwrap_err();
    assert_eq!(err.message, "Failed with status 503");
}

#[tokio::test]
async fn test_catalog_unreachable() {
    let api = common::unreachable_api().await;

    let err = api.catalog().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Connectivity);
}
