//! API Integration Tests
//!
//! Tests marked "live" require a running PostgreSQL instance and
//! DATABASE_URL; they skip otherwise. The rest run anywhere.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::{Duration, Instant};

use chrono::Utc;
use integration_tests::{
    assert_json, check_test_env, unreachable_config, ErrorBody, TestServer, TimeBody,
    POOL_TIMEOUT_MESSAGE,
};
use reqwest::StatusCode;

// ============================================================================
// Live database
// ============================================================================

#[tokio::test]
async fn test_get_api_live() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api").await.expect("Request failed");

    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let body: TimeBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "Hello from Node");
    assert!((Utc::now() - body.time).num_seconds().abs() < 300);
}

#[tokio::test]
async fn test_concurrent_requests_live() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let requests = (0..50).map(|_| server.get("/api"));
    let responses = futures::future::join_all(requests).await;

    for response in responses {
        let body: TimeBody = assert_json(response.unwrap(), StatusCode::OK)
            .await
            .unwrap();
        assert_eq!(body.message, "Hello from Node");
    }
}

// ============================================================================
// Unreachable database
// ============================================================================

#[tokio::test]
async fn test_unreachable_database_returns_500() {
    let server = TestServer::start_with_config(unreachable_config())
        .await
        .expect("startup must not need the database");

    let started = Instant::now();
    let response = server.get("/api").await.expect("Request failed");
    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");

    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(!body.error.is_empty());
    assert_ne!(body.error, POOL_TIMEOUT_MESSAGE);
    assert!(body.error.to_lowercase().contains("refused"), "error: {}", body.error);
}

#[tokio::test]
async fn test_server_survives_database_failures() {
    let server = TestServer::start_with_config(unreachable_config())
        .await
        .unwrap();

    let requests = (0..50).map(|_| server.get("/api"));
    let responses = futures::future::join_all(requests).await;

    for response in responses {
        let body: ErrorBody = assert_json(response.unwrap(), StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();
        assert!(!body.error.is_empty());
    }

    // Still serving afterwards
    let response = server.get("/api").await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = TestServer::start_with_config(unreachable_config())
        .await
        .unwrap();

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
