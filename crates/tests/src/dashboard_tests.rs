use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, BorrowedBook, MISSING_DATE};

use crate::common::{self, Recorder};

#[tokio::test]
async fn test_borrowed_books_are_normalized() {
    let app = Router::new().route(
        "/get-user/{username}",
        common::get_json(
            StatusCode::OK,
            json!({
                "username": "j5sangha",
                "borrowed_books": [
                    {
                        "_id": "b1",
                        "name": "Look Back",
                        "author": "Tatsuki Fujimoto",
                        "genre": "Manga",
                        "cover_filename": "look_back.jpg",
                        "borrowingDate": "2025-04-05",
                        "due_date": "2025-04-19"
                    },
                    {
                        "_id": "b2",
                        "name": "Yotsuba&! Vol. 1",
                        "author": "Kiyohiko Azuma",
                        "genre": "Manga",
                        "cover_filename": "",
                        "borrowing_date": "",
                        "dueDate": "2025-04-21"
                    }
                ]
            }),
        ),
    );
    let api = common::serve(app).await;

    let books = api.borrowed_books("j5sangha").await.unwrap();

    assert_eq!(
        books,
        vec![
            BorrowedBook {
                id: "b1".to_string(),
                name: "Look Back".to_string(),
                author: "Tatsuki Fujimoto".to_string(),
                genre: "Manga".to_string(),
                cover_filename: Some("look_back.jpg".to_string()),
                borrowing_date: "2025-04-05".to_string(),
                due_date: "2025-04-19".to_string(),
            },
            BorrowedBook {
                id: "b2".to_string(),
                name: "Yotsuba&! Vol. 1".to_string(),
                author: "Kiyohiko Azuma".to_string(),
                genre: "Manga".to_string(),
                cover_filename: None,
                borrowing_date: MISSING_DATE.to_string(),
                due_date: "2025-04-21".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_usernames_are_percent_encoded_in_path() {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let app = Router::new().route(
        "/get-user/{username}",
        get(move |Path(username): Path<String>| async move {
            seen.record(Value::String(username));
            Json(json!({"borrowed_books": []}))
        }),
    );
    let api = common::serve(app).await;

    let books = api.borrowed_books("jane doe/1").await.unwrap();

    assert!(books.is_empty());
    assert_eq!(recorder.seen(), vec![json!("jane doe/1")]);
}

#[tokio::test]
async fn test_user_record_error_field_is_load_error() {
    let app = Router::new().route(
        "/get-user/{username}",
        common::get_json(StatusCode::OK, json!({"error": "User not found"})),
    );
    let api = common::serve(app).await;

    let err = api.borrowed_books("ghost").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "User not found");
}

#[tokio::test]
async fn test_user_record_status_failure() {
    let app = Router::new().route(
        "/get-user/{username}",
        common::get_json(StatusCode::NOT_FOUND, json!({"error": "User not found"})),
    );
    let api = common::serve(app).await;

    let err = api.borrowed_books("ghost").await.unwrap_err();
    assert_eq!(err.message, "Failed with status 404");
}

#[tokio::test]
async fn test_user_record_without_books_is_empty() {
    let app = Router::new().route(
        "/get-user/{username}",
        common::get_json(StatusCode::OK, json!({"username": "s9gill"})),
    );
    let api = common::serve(app).await;

    assert!(api.borrowed_books("s9gill").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_record_unreachable() {
    let api = common::unreachable_api().await;

    let err = api.borrowed_books("j5sangha").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Connectivity);
}

#[tokio::test]
async fn test_recommendations_listed_in_order() {
    let app = Router::new().route(
        "/recommendations/{username}",
        common::get_json(
            StatusCode::OK,
            json!([
                {"name": "Chainsaw Man Vol. 1", "author": "Tatsuki Fujimoto", "genre": "Manga",
                 "similarity": 0.87, "reason": "Same author as Look Back"},
                {"name": "Saga Vol. 1", "author": "Brian K. Vaughan", "genre": "Comic"}
            ]),
        ),
    );
    let api = common::serve(app).await;

    let recs = api.recommendations("j5sangha").await;

    assert_eq!(
        recs.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["Chainsaw Man Vol. 1", "Saga Vol. 1"]
    );
    assert_eq!(recs[0].match_label().as_deref(), Some("Match: 87%"));
    assert_eq!(recs[1].match_label(), None);
}

#[tokio::test]
async fn test_recommendations_failures_become_empty() {
    let app = Router::new()
        .route(
            "/recommendations/{username}",
            common::get_json(StatusCode::NOT_FOUND, json!({"error": "No recommendations"})),
        );
    let api = common::serve(app).await;
    assert!(api.recommendations("j5sangha").await.is_empty());

    let malformed = Router::new().route(
        "/recommendations/{username}",
        common::get_json(StatusCode::OK, json!({"unexpected": true})),
    );
    let api = common::serve(malformed).await;
    assert!(api.recommendations("j5sangha").await.is_empty());

    let api = common::unreachable_api().await;
    assert!(api.recommendations("j5sangha").await.is_empty());
}
