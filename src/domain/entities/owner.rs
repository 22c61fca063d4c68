//! Owner entity and lookup trait.
//!
//! Maps to the `owners` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// The veterinarian/user a service record belongs to.
///
/// Maps to the `owners` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
/// - email: TEXT NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

/// Read-only owner lookup, used when a service record is created.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Find an owner by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, AppError>;
}
