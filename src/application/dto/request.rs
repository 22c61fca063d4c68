//! Request DTOs
//!
//! Data structures for API request bodies. Service records arrive as
//! multipart forms; the text fields are collected into these structs and
//! validated before reaching the service layer.

use validator::{Validate, ValidationError};

use crate::application::services::CreateServiceDto;
use crate::domain::ServicePatch;

/// Create service form
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateServiceForm {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(
        range(min = 0.0, message = "Price must not be negative"),
        custom(function = "finite_price")
    )]
    pub price: Option<f64>,

    pub owner_id: i64,
}

impl CreateServiceForm {
    pub fn into_dto(self, image: Option<Vec<u8>>) -> CreateServiceDto {
        CreateServiceDto {
            name: self.name,
            description: self.description,
            price: self.price,
            owner_id: self.owner_id,
            image,
        }
    }
}

/// Rejects NaN and infinities, which `range` accepts.
fn finite_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        Ok(())
    } else {
        let mut error = ValidationError::new("finite");
        error.message = Some("Price must be a finite number".into());
        Err(error)
    }
}

/// Update service form
///
/// An empty name is accepted here: a supplied value always overwrites.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateServiceForm {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(
        range(min = 0.0, message = "Price must not be negative"),
        custom(function = "finite_price")
    )]
    pub price: Option<f64>,
}

impl UpdateServiceForm {
    pub fn into_patch(self, image: Option<Vec<u8>>) -> ServicePatch {
        ServicePatch {
            name: self.name,
            description: self.description,
            price: self.price,
            image,
        }
    }
}
