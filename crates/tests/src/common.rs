use std::sync::{Arc, Mutex};

use axum::{
    http::StatusCode,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use client::LibraryApi;
use serde_json::Value;

/// Serve `router` on an ephemeral local port and return a client pointed at it.
///
/// The server task lives until the test's runtime shuts down.
pub async fn serve(router: Router) -> LibraryApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Mock backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock backend stopped");
    });
    LibraryApi::new(format!("http://{}", addr))
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_api() -> LibraryApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    LibraryApi::new(format!("http://{}", addr))
}

/// GET route answering with a fixed status and JSON body.
pub fn get_json(status: StatusCode, body: Value) -> MethodRouter {
    get(move || async move { (status, Json(body)) })
}

/// POST route answering with a fixed status and JSON body, recording each
/// request body it receives.
pub fn post_json(status: StatusCode, body: Value, recorder: Recorder) -> MethodRouter {
    post(move |Json(payload): Json<Value>| async move {
        recorder.record(payload);
        (status, Json(body))
    })
}

/// Request payloads or path segments seen by the mock backend, in order.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Value>>>);

impl Recorder {
    pub fn record(&self, value: Value) {
        self.0.lock().expect("Recorder poisoned").push(value);
    }

    pub fn seen(&self) -> Vec<Value> {
        self.0.lock().expect("Recorder poisoned").clone()
    }
}
