use crate::modules::users::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn create(body: impl Into<String>) -> Request<Body> {
    Request::post("/users")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

fn fetch(id: &str) -> Request<Body> {
    Request::get(format!("/users/{id}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn creates_then_fetches_a_user() {
    let app = router(AppState::new(Arc::new(InMemoryUsers::new())));

    let (status, created) = send(&app, create(r#"{"id":"u1","name":"Ann"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created.contains(r#""id":"u1","name":"Ann""#));

    let (status, fetched) = send(&app, fetch("u1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, missing) = send(&app, fetch("unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, "User not found");
}

#[tokio::test]
async fn second_create_under_the_same_id_overwrites_the_first() {
    let app = router(AppState::new(Arc::new(InMemoryUsers::new())));

    send(&app, create(r#"{"id":"u1","name":"Ann"}"#)).await;
    send(&app, create(r#"{"id":"u1","name":"Bea"}"#)).await;

    let (status, fetched) = send(&app, fetch("u1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, r#"{"id":"u1","name":"Bea"}"#);
}

#[tokio::test]
async fn malformed_create_does_not_store_anything() {
    let users = Arc::new(InMemoryUsers::new());
    let app = router(AppState::new(users.clone()));

    let (status, _) = send(&app, create(r#"{"id":"u1","name":"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, fetch("u1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(users.is_empty().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_under_distinct_ids_are_all_kept() {
    let users = Arc::new(InMemoryUsers::new());
    let app = router(AppState::new(users.clone()));

    let tasks: Vec<_> = (0..100)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = format!(r#"{{"id":"u{i}","name":"n{i}"}}"#);
                send(&app, create(body)).await
            })
        })
        .collect();
    for task in tasks {
        let (status, _) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(users.len().await, 100);
    for i in 0..100 {
        let (status, body) = send(&app, fetch(&format!("u{i}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!(r#"{{"id":"u{i}","name":"n{i}"}}"#));
    }
}
