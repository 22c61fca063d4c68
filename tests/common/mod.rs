//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use vet_services::config::Settings;
use vet_services::domain::Owner;
use vet_services::infrastructure::repositories::InMemoryOwnerRepository;
use vet_services::startup::{build_router, AppState};

/// Owner ids present in every test application
pub const OWNER_IDS: [i64; 2] = [7, 8];

/// Smallest byte sequence recognised as a PNG
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

/// Test application over the in-memory store
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with owners 7 and 8
    pub fn new() -> Self {
        Self::with_settings(Settings::in_memory())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let owners = InMemoryOwnerRepository::with_owners(OWNER_IDS.iter().map(|&id| Owner {
            id,
            name: format!("Dr. {}", id),
            email: None,
        }));
        let state = AppState::in_memory(owners, settings);

        Self {
            router: build_router(state),
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request to the application
    pub async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a multipart request with the given method
    pub async fn multipart(&self, method: &str, uri: &str, form: MultipartForm) -> Response {
        let (content_type, body) = form.finish();
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Create a service and return its JSON representation
    pub async fn create_service(&self, form: MultipartForm) -> serde_json::Value {
        let response = self.multipart("POST", "/api/v1/services", form).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await
    }
}

/// Read the full response body
pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Read and deserialize a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Minimal `multipart/form-data` body builder
pub struct MultipartForm {
    boundary: &'static str,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "vet-services-test-boundary",
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                self.boundary, name, filename
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

/// Form for the "Bath" service used across tests
pub fn bath_form(owner_id: i64) -> MultipartForm {
    MultipartForm::new()
        .text("name", "Bath")
        .text("description", "Full wash")
        .text("price", "25.0")
        .text("owner_id", &owner_id.to_string())
}
