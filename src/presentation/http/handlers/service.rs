//! Service Record Handlers

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::ServiceResponse;
use crate::presentation::http::multipart::{read_service_form, FormKind};
use crate::shared::error::AppError;
use crate::shared::validation::validate;
use crate::startup::AppState;

fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", what)))
}

/// List all services
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let services = state.services.list().await?;
    Ok(Json(services))
}

/// Get service by ID
pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<ServiceResponse>, AppError> {
    let service_id = parse_id(&service_id, "service")?;

    let service = state.services.get_by_id(service_id).await?;
    Ok(Json(service))
}

/// Create a service from a multipart form
pub async fn create_service(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ServiceResponse>), AppError> {
    let (form, image) = read_service_form(multipart, FormKind::Create).await?.into_create()?;
    validate(&form)?;

    let service = state.services.create(form.into_dto(image)).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Update the supplied fields of a service
pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    multipart: Multipart,
) -> Result<Json<ServiceResponse>, AppError> {
    let service_id = parse_id(&service_id, "service")?;

    let (form, image) = read_service_form(multipart, FormKind::Update).await?.into_update();
    validate(&form)?;

    let service = state
        .services
        .update(service_id, form.into_patch(image))
        .await?;
    Ok(Json(service))
}

/// Delete a service
pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let service_id = parse_id(&service_id, "service")?;

    state.services.delete(service_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the raw image of a service.
///
/// 204 when the service exists but has no image.
pub async fn get_service_image(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Response, AppError> {
    let service_id = parse_id(&service_id, "service")?;

    let response = match state.services.get_image(service_id).await? {
        Some(bytes) => {
            let content_type = image_content_type(&bytes);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// List the services of an owner
pub async fn list_owner_services(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let owner_id = parse_id(&owner_id, "owner")?;

    let services = state.services.list_by_owner(owner_id).await?;
    Ok(Json(services))
}

/// Guess the MIME type of stored image bytes from their signature.
fn image_content_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "application/octet-stream",
    }
}
