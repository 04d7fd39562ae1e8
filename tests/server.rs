//! End-to-end test over a real TCP socket.

#![allow(clippy::panic, clippy::indexing_slicing)]

use serde_json::{Value, json};

use blog_backend::api;
use blog_backend::app_state::AppState;
use blog_backend::config::BlogConfig;

#[tokio::test]
async fn post_and_comment_over_http() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let config = BlogConfig {
        data_dir: dir.path().to_path_buf(),
        static_dir: dir.path().to_path_buf(),
        ..BlogConfig::default()
    };
    let Ok(state) = AppState::open(&config).await else {
        panic!("failed to open stores");
    };
    let app = api::build_app(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|e| panic!("bind: {e}"));
    let addr = listener.local_addr().unwrap_or_else(|e| panic!("addr: {e}"));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let created: Value = client
        .post(format!("{base}/api/posts"))
        .json(&json!({"title": "hello", "body": "first post"}))
        .send()
        .await
        .unwrap_or_else(|e| panic!("send: {e}"))
        .json()
        .await
        .unwrap_or_else(|e| panic!("decode: {e}"));
    assert_eq!(created["success"], json!(true));
    let id = created["post"]["id"]
        .as_str()
        .unwrap_or_else(|| panic!("missing id"))
        .to_string();

    let comment = client
        .post(format!("{base}/api/comments/{id}"))
        .json(&json!({"text": "nice"}))
        .send()
        .await
        .unwrap_or_else(|e| panic!("send: {e}"));
    assert_eq!(comment.status(), reqwest::StatusCode::OK);

    let comments: Value = client
        .get(format!("{base}/api/comments/{id}"))
        .send()
        .await
        .unwrap_or_else(|e| panic!("send: {e}"))
        .json()
        .await
        .unwrap_or_else(|e| panic!("decode: {e}"));
    assert_eq!(comments[0]["text"], json!("nice"));
    assert_eq!(comments[0]["postId"], json!(id));

    let missing = client
        .get(format!("{base}/api/posts/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .unwrap_or_else(|e| panic!("send: {e}"));
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}
