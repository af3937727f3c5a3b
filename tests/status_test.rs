//! Integration tests for the status endpoint.
//!
//! The backing stores are injected in failed or unconfigured states so the
//! "always respond 200" contract is exercised without a running PostgreSQL
//! or Redis instance.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use conncheck::errors::AppResult;
use conncheck::infra::db::DbTransport;
use conncheck::{api::create_router, AppState, Cache, Database};

fn no_transport() -> AppResult<DbTransport> {
    // Same failure an environment with neither INSTANCE_HOST nor
    // INSTANCE_UNIX_SOCKET produces.
    DbTransport::from_lookup(|_| None)
}

fn tls_with_missing_files() -> AppResult<DbTransport> {
    DbTransport::from_lookup(|key| match key {
        "INSTANCE_HOST" => Some("127.0.0.1".to_string()),
        "DB_ROOT_CERT" => Some("/nonexistent/server-ca.pem".to_string()),
        "DB_KEY" => Some("/nonexistent/client-key.pem".to_string()),
        "DB_CERT" => Some("/nonexistent/client-cert.pem".to_string()),
        "DB_USER" => Some("postgres".to_string()),
        "DB_NAME" => Some("postgres".to_string()),
        _ => None,
    })
}

fn app_with_source(source: fn() -> AppResult<DbTransport>) -> Router {
    let state = AppState::new(
        Cache::disconnected(),
        Arc::new(Database::with_transport_source(source)),
        "10.0.0.5",
    );
    create_router(state)
}

async fn get_root(app: Router) -> axum::response::Response {
    app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn responds_200_with_both_stores_down() {
    let response = get_root(app_with_source(no_transport)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn response_is_marked_non_cacheable() {
    let response = get_root(app_with_source(no_transport)).await;
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}

#[tokio::test]
async fn unconfigured_database_renders_placeholder() {
    let response = get_root(app_with_source(no_transport)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();

    assert!(page.contains("PostgreSQL not connected"));
    assert!(page.contains("Connecting to Redis at: 10.0.0.5"));
}

#[tokio::test]
async fn unreadable_tls_material_still_renders() {
    let response = get_root(app_with_source(tls_with_missing_files)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();

    assert!(page.contains("PostgreSQL not connected"));
}

#[tokio::test]
async fn concurrent_first_requests_all_succeed() {
    let app = app_with_source(no_transport);

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move { get_root(app).await.status() }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }
}
