//! Owner Repository Implementation
//!
//! PostgreSQL lookup of service owners.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Owner, OwnerRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct OwnerRow {
    id: i64,
    name: String,
    email: Option<String>,
}

/// PostgreSQL owner repository implementation.
#[derive(Clone)]
pub struct PgOwnerRepository {
    pool: PgPool,
}

impl PgOwnerRepository {
    /// Create a new PgOwnerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, AppError> {
        let row = sqlx::query_as::<_, OwnerRow>(
            "SELECT id, name, email FROM owners WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Owner {
            id: r.id,
            name: r.name,
            email: r.email,
        }))
    }
}
