//! Health Check and Metrics API Tests

use axum::http::StatusCode;

use crate::common::{body_bytes, json_body, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = json_body(response).await;
    assert_eq!(json["status"], "healthy");
}

/// Test liveness probe endpoint
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = json_body(response).await;
    assert_eq!(json["status"], "alive");
}

/// In-memory store is always ready
#[tokio::test]
async fn test_readiness_probe_in_memory() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["message"], "in-memory store");
}

/// Service operations show up in the Prometheus output
#[tokio::test]
async fn test_metrics_exposes_service_operations() {
    let app = TestApp::new();
    app.get("/api/v1/services").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("vet_services_service_operations_total"));
    assert!(text.contains("vet_services_http_requests_total"));
}
