//! In-Memory Repository Implementations
//!
//! Process-local stores used when the service runs without a database
//! (`store.backend = "memory"`) and by the test suite. Records live in a
//! `BTreeMap` so listing follows id order, like the `ORDER BY id` queries of
//! the PostgreSQL repositories.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{NewServiceRecord, Owner, OwnerRepository, ServiceRecord, ServiceRecordRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct ServiceTable {
    rows: BTreeMap<i64, ServiceRecord>,
    last_id: i64,
}

/// In-memory service record repository.
#[derive(Debug, Default)]
pub struct InMemoryServiceRecordRepository {
    table: RwLock<ServiceTable>,
}

impl InMemoryServiceRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ServiceRecordRepository for InMemoryServiceRecordRepository {
    async fn find_all(&self) -> Result<Vec<ServiceRecord>, AppError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceRecord>, AppError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.table.read().rows.contains_key(&id))
    }

    /// Ids start at 1 and are never reused, matching a BIGSERIAL column.
    async fn insert(&self, record: NewServiceRecord) -> Result<ServiceRecord, AppError> {
        let mut table = self.table.write();
        table.last_id += 1;
        let record = record.with_id(table.last_id);
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn save(&self, record: &ServiceRecord) -> Result<ServiceRecord, AppError> {
        let mut table = self.table.write();
        let stored = table
            .rows
            .get_mut(&record.id)
            .ok_or_else(|| AppError::NotFound(format!("Service with id {} not found", record.id)))?;

        // Same columns as the SQL UPDATE: the owner stays as stored.
        stored.name = record.name.clone();
        stored.description = record.description.clone();
        stored.price = record.price;
        stored.image = record.image.clone();

        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.table
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Service with id {} not found", id)))
    }

    async fn find_by_owner_id(&self, owner_id: i64) -> Result<Vec<ServiceRecord>, AppError> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

/// In-memory owner directory.
#[derive(Debug, Default)]
pub struct InMemoryOwnerRepository {
    owners: RwLock<BTreeMap<i64, Owner>>,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory holding `owners`.
    pub fn with_owners(owners: impl IntoIterator<Item = Owner>) -> Self {
        let repo = Self::new();
        for owner in owners {
            repo.add(owner);
        }
        repo
    }

    /// Register an owner, replacing any previous one with the same id.
    pub fn add(&self, owner: Owner) {
        self.owners.write().insert(owner.id, owner);
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, AppError> {
        Ok(self.owners.read().get(&id).cloned())
    }
}
