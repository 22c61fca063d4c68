//! Service Record Repository Implementation
//!
//! PostgreSQL implementation of the ServiceRecordRepository trait.
//! Maps between the `services` table and the domain ServiceRecord entity.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewServiceRecord, ServiceRecord, ServiceRecordRepository};
use crate::shared::error::AppError;

/// Database row representation matching the services table schema.
#[derive(Debug, sqlx::FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: Option<f64>,
    image: Option<Vec<u8>>,
    owner_id: i64,
}

impl ServiceRow {
    /// Convert database row to domain ServiceRecord entity.
    fn into_record(self) -> ServiceRecord {
        ServiceRecord {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            owner_id: self.owner_id,
        }
    }
}

/// PostgreSQL service record repository implementation.
#[derive(Clone)]
pub struct PgServiceRecordRepository {
    pool: PgPool,
}

impl PgServiceRecordRepository {
    /// Create a new PgServiceRecordRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRecordRepository for PgServiceRecordRepository {
    async fn find_all(&self) -> Result<Vec<ServiceRecord>, AppError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, name, description, price, image, owner_id
            FROM services
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ServiceRow::into_record).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceRecord>, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, name, description, price, image, owner_id
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ServiceRow::into_record))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM services WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    /// Insert a new service; the id comes from the BIGSERIAL sequence.
    async fn insert(&self, record: NewServiceRecord) -> Result<ServiceRecord, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            INSERT INTO services (name, description, price, image, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, image, owner_id
            "#,
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .bind(&record.image)
        .bind(record.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound(format!("Owner with id {} not found", record.owner_id))
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_record())
    }

    /// Overwrite the mutable columns. `owner_id` is not part of the update.
    async fn save(&self, record: &ServiceRecord) -> Result<ServiceRecord, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            UPDATE services
            SET name = $2,
                description = $3,
                price = $4,
                image = $5
            WHERE id = $1
            RETURNING id, name, description, price, image, owner_id
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .bind(&record.image)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service with id {} not found", record.id)))?;

        Ok(row.into_record())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service with id {} not found", id)));
        }

        Ok(())
    }

    async fn find_by_owner_id(&self, owner_id: i64) -> Result<Vec<ServiceRecord>, AppError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, name, description, price, image, owner_id
            FROM services
            WHERE owner_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ServiceRow::into_record).collect())
    }
}
