use axum::{http::StatusCode, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, Book, CheckoutRequest, SelectionSet, CHECKOUT_PRECONDITION_MESSAGE,
};

use crate::common::{self, Recorder};

fn book(id: &str, borrowed: bool) -> Book {
    Book {
        id: id.to_string(),
        name: format!("Book {id}"),
        author: "Author".to_string(),
        genre: "Genre".to_string(),
        description: String::new(),
        cover_filename: None,
        rating: None,
        borrowed,
    }
}

fn borrow_app(status: StatusCode, body: Value, recorder: Recorder) -> Router {
    Router::new().route("/borrow-books", common::post_json(status, body, recorder))
}

fn selection_of(books: &[Book]) -> SelectionSet {
    let mut selection = SelectionSet::new();
    for b in books {
        selection.toggle(b);
    }
    selection
}

#[tokio::test]
async fn test_checkout_posts_selection_in_order() {
    let recorder = Recorder::default();
    let api = common::serve(borrow_app(
        StatusCode::OK,
        json!({"success": true}),
        recorder.clone(),
    ))
    .await;

    let selection = selection_of(&[book("b2", false), book("b9", true), book("b1", false)]);
    let request = CheckoutRequest::prepare(&selection, Some("j5sangha")).unwrap();
    api.borrow_books(&request).await.unwrap();

    assert_eq!(
        recorder.seen(),
        vec![json!({"username": "j5sangha", "bookIds": ["b2", "b1"]})]
    );
}

#[tokio::test]
async fn test_checkout_accepts_any_success_status() {
    let api = common::serve(borrow_app(
        StatusCode::CREATED,
        json!({}),
        Recorder::default(),
    ))
    .await;

    let request = CheckoutRequest::prepare(&selection_of(&[book("b1", false)]), Some("s9gill"))
        .unwrap();
    assert!(api.borrow_books(&request).await.is_ok());
}

#[tokio::test]
async fn test_checkout_failure_prefers_message() {
    let api = common::serve(borrow_app(
        StatusCode::BAD_REQUEST,
        json!({"message": "Book already borrowed", "error": "conflict"}),
        Recorder::default(),
    ))
    .await;

    let request = CheckoutRequest::prepare(&selection_of(&[book("b1", false)]), Some("s9gill"))
        .unwrap();
    let err = api.borrow_books(&request).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "Book already borrowed");
}

#[tokio::test]
async fn test_checkout_failure_uses_error_field() {
    let api = common::serve(borrow_app(
        StatusCode::BAD_REQUEST,
        json!({"success": false, "error": "Invalid book id"}),
        Recorder::default(),
    ))
    .await;

    let request = CheckoutRequest::prepare(&selection_of(&[book("b1", false)]), Some("s9gill"))
        .unwrap();
    let err = api.borrow_books(&request).await.unwrap_err();
    assert_eq!(err.message, "Invalid book id");
}

#[tokio::test]
async fn test_checkout_failure_without_reason_falls_back() {
    let api = common::serve(borrow_app(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({}),
        Recorder::default(),
    ))
    .await;

    let request = CheckoutRequest::prepare(&selection_of(&[book("b1", false)]), Some("s9gill"))
        .unwrap();
    let err = api.borrow_books(&request).await.unwrap_err();
    assert_eq!(err.message, "Error borrowing books");
}

#[tokio::test]
async fn test_checkout_precondition_sends_nothing() {
    let recorder = Recorder::default();
    let _api = common::serve(borrow_app(
        StatusCode::OK,
        json!({}),
        recorder.clone(),
    ))
    .await;

    let empty = CheckoutRequest::prepare(&SelectionSet::new(), Some("s9gill")).unwrap_err();
    let anonymous =
        CheckoutRequest::prepare(&selection_of(&[book("b1", false)]), None).unwrap_err();

    for err in [empty, anonymous] {
        assert_eq!(err.kind, AppErrorKind::Precondition);
        assert_eq!(err.message, CHECKOUT_PRECONDITION_MESSAGE);
    }
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn test_checkout_unreachable() {
    let api = common::unreachable_api().await;

    let request = CheckoutRequest::prepare(&selection_of(&[book("b1", false)]), Some("s9gill"))
        .unwrap();
    let err = api.borrow_books(&request).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Connectivity);
}
