//! Service Record API Tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;

use vet_services::config::Settings;

use crate::common::{bath_form, body_bytes, json_body, MultipartForm, TestApp, PNG_BYTES};

#[tokio::test]
async fn test_create_service_returns_created() {
    let app = TestApp::new();

    let response = app
        .multipart("POST", "/api/v1/services", bath_form(7))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json: Value = json_body(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Bath");
    assert_eq!(json["description"], "Full wash");
    assert_eq!(json["price"], 25.0);
    assert_eq!(json["owner_id"], 7);
    assert_eq!(json["has_image"], false);
    assert!(json.get("image").is_none());
}

#[tokio::test]
async fn test_get_after_create_returns_same_fields() {
    let app = TestApp::new();
    let created = app.create_service(bath_form(7)).await;

    let response = app
        .get(&format!("/api/v1/services/{}", created["id"]))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = json_body(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_for_unknown_owner_is_not_found() {
    let app = TestApp::new();

    let response = app
        .multipart("POST", "/api/v1/services", bath_form(999))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json: Value = json_body(response).await;
    assert_eq!(json["message"], "Owner with id 999 not found");

    let list: Vec<Value> = json_body(app.get("/api/v1/services").await).await;
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_create_without_name_is_bad_request() {
    let app = TestApp::new();
    let form = MultipartForm::new().text("owner_id", "7");

    let response = app.multipart("POST", "/api/v1/services", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_malformed_price_is_bad_request() {
    let app = TestApp::new();
    let form = MultipartForm::new()
        .text("name", "Bath")
        .text("price", "cheap")
        .text("owner_id", "7");

    let response = app.multipart("POST", "/api/v1/services", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_negative_price_fails_validation() {
    let app = TestApp::new();
    let form = MultipartForm::new()
        .text("name", "Bath")
        .text("price", "-3")
        .text("owner_id", "7");

    let response = app.multipart("POST", "/api/v1/services", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = json_body(response).await;
    assert_eq!(json["code"], 10007);
    assert_eq!(json["errors"][0]["field"], "price");
}

#[tokio::test]
async fn test_create_with_non_finite_price_fails_validation() {
    let app = TestApp::new();

    for price in ["NaN", "inf", "-inf"] {
        let form = MultipartForm::new()
            .text("name", "Bath")
            .text("price", price)
            .text("owner_id", "7");

        let response = app.multipart("POST", "/api/v1/services", form).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "price {}", price);
        let json: Value = json_body(response).await;
        assert_eq!(json["code"], 10007);
        assert_eq!(json["errors"][0]["field"], "price");
    }

    let list: Vec<Value> = json_body(app.get("/api/v1/services").await).await;
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_update_with_non_finite_price_fails_validation() {
    let app = TestApp::new();
    let created = app.create_service(bath_form(7)).await;
    let uri = format!("/api/v1/services/{}", created["id"]);

    let response = app
        .multipart("PUT", &uri, MultipartForm::new().text("price", "NaN"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let fetched: Value = json_body(app.get(&uri).await).await;
    assert_eq!(fetched["price"], 25.0);
}

#[tokio::test]
async fn test_get_missing_service_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/services/99").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json: Value = json_body(response).await;
    assert_eq!(json["code"], 10001);
    assert_eq!(json["message"], "Service with id 99 not found");
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/v1/services/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_image_round_trip_with_content_type() {
    let app = TestApp::new();
    let created = app
        .create_service(bath_form(7).file("image", "bath.png", PNG_BYTES))
        .await;
    assert_eq!(created["has_image"], true);

    let response = app
        .get(&format!("/api/v1/services/{}/image", created["id"]))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(body_bytes(response).await, PNG_BYTES.to_vec());
}

#[tokio::test]
async fn test_image_of_service_without_image_is_no_content() {
    let app = TestApp::new();
    let created = app.create_service(bath_form(7)).await;

    let response = app
        .get(&format!("/api/v1/services/{}/image", created["id"]))
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_image_of_missing_service_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/services/5/image").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_name_only_keeps_other_fields() {
    let app = TestApp::new();
    let created = app
        .create_service(bath_form(7).file("image", "bath.png", PNG_BYTES))
        .await;
    let uri = format!("/api/v1/services/{}", created["id"]);

    let response = app
        .multipart("PUT", &uri, MultipartForm::new().text("name", "X"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = json_body(response).await;
    assert_eq!(updated["name"], "X");
    assert_eq!(updated["description"], "Full wash");
    assert_eq!(updated["price"], 25.0);
    assert_eq!(updated["owner_id"], 7);
    assert_eq!(updated["has_image"], true);
}

#[tokio::test]
async fn test_update_with_empty_form_is_noop() {
    let app = TestApp::new();
    let created = app.create_service(bath_form(7)).await;
    let uri = format!("/api/v1/services/{}", created["id"]);

    let response = app.multipart("PUT", &uri, MultipartForm::new()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = json_body(response).await;
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_with_empty_image_keeps_stored_image() {
    let app = TestApp::new();
    let created = app
        .create_service(bath_form(7).file("image", "bath.png", PNG_BYTES))
        .await;
    let id = &created["id"];

    let form = MultipartForm::new().file("image", "", &[]);
    let response = app
        .multipart("PUT", &format!("/api/v1/services/{}", id), form)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let image = app.get(&format!("/api/v1/services/{}/image", id)).await;
    assert_eq!(body_bytes(image).await, PNG_BYTES.to_vec());
}

#[tokio::test]
async fn test_update_ignores_owner_id() {
    let app = TestApp::new();
    let created = app.create_service(bath_form(7)).await;
    let uri = format!("/api/v1/services/{}", created["id"]);

    let response = app
        .multipart("PUT", &uri, MultipartForm::new().text("owner_id", "8"))
        .await;

    let updated: Value = json_body(response).await;
    assert_eq!(updated["owner_id"], 7);
}

#[tokio::test]
async fn test_update_skips_malformed_owner_id() {
    let app = TestApp::new();
    let created = app.create_service(bath_form(7)).await;
    let uri = format!("/api/v1/services/{}", created["id"]);

    let form = MultipartForm::new()
        .text("name", "Deluxe bath")
        .text("owner_id", "not-a-number");
    let response = app.multipart("PUT", &uri, form).await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = json_body(response).await;
    assert_eq!(updated["name"], "Deluxe bath");
    assert_eq!(updated["owner_id"], 7);
}

#[tokio::test]
async fn test_update_missing_service_is_not_found() {
    let app = TestApp::new();

    let response = app
        .multipart("PUT", "/api/v1/services/42", MultipartForm::new().text("name", "X"))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_and_delete_again() {
    let app = TestApp::new();
    let created = app.create_service(bath_form(7)).await;
    let uri = format!("/api/v1/services/{}", created["id"]);

    assert_eq!(app.delete(&uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_returns_services_in_id_order() {
    let app = TestApp::new();
    app.create_service(bath_form(7)).await;
    app.create_service(bath_form(8)).await;

    let list: Vec<Value> = json_body(app.get("/api/v1/services").await).await;

    let ids: Vec<i64> = list.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_list_by_owner_returns_only_owned() {
    let app = TestApp::new();
    app.create_service(bath_form(7)).await;
    app.create_service(bath_form(8)).await;
    app.create_service(bath_form(7)).await;

    let owned: Vec<Value> = json_body(app.get("/api/v1/owners/7/services").await).await;
    let ids: Vec<i64> = owned.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 3]);

    let none: Vec<Value> = json_body(app.get("/api/v1/owners/999/services").await).await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let mut settings = Settings::in_memory();
    settings.upload.max_body_bytes = 256;
    let app = TestApp::with_settings(settings);

    let form = bath_form(7).file("image", "big.bin", &vec![0u8; 4096]);
    let response = app.multipart("POST", "/api/v1/services", form).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json: Value = json_body(response).await;
    assert_eq!(json["code"], 10008);

    let list: Vec<Value> = json_body(app.get("/api/v1/services").await).await;
    assert!(list.is_empty());
}
