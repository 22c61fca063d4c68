//! Service Record Service
//!
//! CRUD over the clinic's service catalog: listing, lookup, creation with an
//! optional image, partial update, deletion, image retrieval, and listing by
//! owner.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::ServiceResponse;
use crate::domain::{
    NewServiceRecord, OwnerRepository, ServicePatch, ServiceRecordRepository,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Service record service trait
#[async_trait]
pub trait ServiceRecordService: Send + Sync {
    /// List every service record, in id order
    async fn list(&self) -> Result<Vec<ServiceResponse>, ServiceError>;

    /// Get a service record by ID
    async fn get_by_id(&self, id: i64) -> Result<ServiceResponse, ServiceError>;

    /// Create a service record for an existing owner
    async fn create(&self, request: CreateServiceDto) -> Result<ServiceResponse, ServiceError>;

    /// Merge the supplied fields into an existing record
    async fn update(&self, id: i64, patch: ServicePatch) -> Result<ServiceResponse, ServiceError>;

    /// Delete a service record
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;

    /// Get the stored image; `Ok(None)` when the record has none
    async fn get_image(&self, id: i64) -> Result<Option<Vec<u8>>, ServiceError>;

    /// List the records belonging to an owner, in id order
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<ServiceResponse>, ServiceError>;
}

/// Create service request
#[derive(Debug, Clone)]
pub struct CreateServiceDto {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub owner_id: i64,
    pub image: Option<Vec<u8>>,
}

impl From<CreateServiceDto> for NewServiceRecord {
    fn from(dto: CreateServiceDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            image: dto.image,
            owner_id: dto.owner_id,
        }
    }
}

/// Entity named in a [`ServiceError::NotFound`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    ServiceRecord,
    Owner,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::ServiceRecord => f.write_str("Service"),
            EntityKind::Owner => f.write_str("Owner"),
        }
    }
}

/// Service record errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    #[error(transparent)]
    Store(#[from] AppError),
}

impl ServiceError {
    fn service_not_found(id: i64) -> Self {
        ServiceError::NotFound {
            entity: EntityKind::ServiceRecord,
            id,
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::Store(_) => "error",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::NotFound { .. } => AppError::NotFound(error.to_string()),
            ServiceError::Store(e) => e,
        }
    }
}

/// ServiceRecordService implementation
pub struct ServiceRecordServiceImpl<S, O>
where
    S: ServiceRecordRepository,
    O: OwnerRepository,
{
    service_repo: Arc<S>,
    owner_repo: Arc<O>,
}

impl<S, O> ServiceRecordServiceImpl<S, O>
where
    S: ServiceRecordRepository,
    O: OwnerRepository,
{
    pub fn new(service_repo: Arc<S>, owner_repo: Arc<O>) -> Self {
        Self {
            service_repo,
            owner_repo,
        }
    }
}

/// Count the call under `operation` with its outcome, then hand the result back.
fn observe<T>(operation: &str, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::record_service_operation(operation, outcome);
    result
}

#[async_trait]
impl<S, O> ServiceRecordService for ServiceRecordServiceImpl<S, O>
where
    S: ServiceRecordRepository + 'static,
    O: OwnerRepository + 'static,
{
    async fn list(&self) -> Result<Vec<ServiceResponse>, ServiceError> {
        let result: Result<Vec<ServiceResponse>, ServiceError> = async {
            let records = self.service_repo.find_all().await?;
            Ok(records.into_iter().map(ServiceResponse::from).collect())
        }
        .await;

        observe("list", result)
    }

    async fn get_by_id(&self, id: i64) -> Result<ServiceResponse, ServiceError> {
        let result: Result<ServiceResponse, ServiceError> = async {
            let record = self
                .service_repo
                .find_by_id(id)
                .await?
                .ok_or(ServiceError::service_not_found(id))?;

            Ok(ServiceResponse::from(record))
        }
        .await;

        observe("get", result)
    }

    async fn create(&self, request: CreateServiceDto) -> Result<ServiceResponse, ServiceError> {
        let result: Result<ServiceResponse, ServiceError> = async {
            let owner_id = request.owner_id;
            if self.owner_repo.find_by_id(owner_id).await?.is_none() {
                tracing::debug!(owner_id, "Rejecting service for unknown owner");
                return Err(ServiceError::NotFound {
                    entity: EntityKind::Owner,
                    id: owner_id,
                });
            }

            let created = self
                .service_repo
                .insert(NewServiceRecord::from(request))
                .await?;

            tracing::info!(
                service_id = created.id,
                owner_id,
                has_image = created.has_image(),
                "Service created"
            );

            Ok(ServiceResponse::from(created))
        }
        .await;

        observe("create", result)
    }

    async fn update(&self, id: i64, patch: ServicePatch) -> Result<ServiceResponse, ServiceError> {
        let result: Result<ServiceResponse, ServiceError> = async {
            let mut record = self
                .service_repo
                .find_by_id(id)
                .await?
                .ok_or(ServiceError::service_not_found(id))?;

            if patch.is_empty() {
                tracing::debug!(service_id = id, "Update carries no changes");
            }
            patch.apply(&mut record);

            let updated = self.service_repo.save(&record).await?;
            tracing::info!(service_id = id, "Service updated");

            Ok(ServiceResponse::from(updated))
        }
        .await;

        observe("update", result)
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let result: Result<(), ServiceError> = async {
            if !self.service_repo.exists_by_id(id).await? {
                return Err(ServiceError::service_not_found(id));
            }

            self.service_repo.delete_by_id(id).await?;
            tracing::info!(service_id = id, "Service deleted");

            Ok(())
        }
        .await;

        observe("delete", result)
    }

    async fn get_image(&self, id: i64) -> Result<Option<Vec<u8>>, ServiceError> {
        let result: Result<Option<Vec<u8>>, ServiceError> = async {
            let record = self
                .service_repo
                .find_by_id(id)
                .await?
                .ok_or(ServiceError::service_not_found(id))?;

            Ok(record.image)
        }
        .await;

        observe("get_image", result)
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<ServiceResponse>, ServiceError> {
        let result: Result<Vec<ServiceResponse>, ServiceError> = async {
            let records = self.service_repo.find_by_owner_id(owner_id).await?;
            Ok(records.into_iter().map(ServiceResponse::from).collect())
        }
        .await;

        observe("list_by_owner", result)
    }
}
