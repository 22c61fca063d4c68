//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::ServiceRecord;

/// Service record projection.
///
/// Never carries the image bytes; those are served by the image endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub owner_id: i64,
    pub has_image: bool,
}

impl From<&ServiceRecord> for ServiceResponse {
    fn from(record: &ServiceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            owner_id: record.owner_id,
            has_image: record.has_image(),
        }
    }
}

impl From<ServiceRecord> for ServiceResponse {
    fn from(record: ServiceRecord) -> Self {
        let has_image = record.has_image();
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            owner_id: record.owner_id,
            has_image,
        }
    }
}
