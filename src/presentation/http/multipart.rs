//! Multipart Form Parsing
//!
//! Service records are created and updated with `multipart/form-data` so the
//! image can travel with the text fields.
//!
//! Recognised fields: `name`, `description`, `price`, `owner_id`, `image`.
//! Unknown fields are skipped.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::application::dto::{CreateServiceForm, UpdateServiceForm};
use crate::shared::error::AppError;

/// Which request a form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    /// `owner_id` cannot change, so the part is not read.
    Update,
}

/// Raw fields read from a service form.
#[derive(Debug, Default)]
pub struct ServiceFormFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub owner_id: Option<i64>,
    /// Bytes of the `image` part, as sent. An empty part stays `Some(vec![])`.
    pub image: Option<Vec<u8>>,
}

impl ServiceFormFields {
    /// Fields for a create request. `name` and `owner_id` are required.
    pub fn into_create(self) -> Result<(CreateServiceForm, Option<Vec<u8>>), AppError> {
        let name = self.name.ok_or_else(|| missing("name"))?;
        let owner_id = self.owner_id.ok_or_else(|| missing("owner_id"))?;

        let form = CreateServiceForm {
            name,
            description: self.description,
            price: self.price,
            owner_id,
        };
        Ok((form, self.image))
    }

    /// Fields for an update request. `owner_id` is never set here.
    pub fn into_update(self) -> (UpdateServiceForm, Option<Vec<u8>>) {
        let form = UpdateServiceForm {
            name: self.name,
            description: self.description,
            price: self.price,
        };
        (form, self.image)
    }
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("Missing required field: {}", field))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(format!("Multipart error: {}", e.body_text()))
    }
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

/// Parse a numeric field; blank input counts as absent.
fn parse_number<T: std::str::FromStr>(field: &str, text: &str) -> Result<Option<T>, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", field, text)))
}

/// Read every part of a service form.
pub async fn read_service_form(
    mut multipart: Multipart,
    kind: FormKind,
) -> Result<ServiceFormFields, AppError> {
    let mut fields = ServiceFormFields::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => fields.name = Some(read_text(field).await?),
            "description" => fields.description = Some(read_text(field).await?),
            "price" => {
                let text = read_text(field).await?;
                fields.price = parse_number("price", &text)?;
            }
            "owner_id" if kind == FormKind::Update => {
                tracing::debug!("Ignoring owner_id on update");
            }
            "owner_id" => {
                let text = read_text(field).await?;
                fields.owner_id = parse_number("owner_id", &text)?;
            }
            "image" => {
                let bytes = field.bytes().await.map_err(multipart_error)?;
                fields.image = Some(bytes.to_vec());
            }
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(fields)
}
