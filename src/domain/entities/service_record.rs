//! Service Record entity, partial-update patch, and repository trait.
//!
//! Maps to the `services` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A priced offering of the clinic (bath, vaccination, check-up...).
///
/// Maps to the `services` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
/// - description: TEXT NULL
/// - price: DOUBLE PRECISION NULL
/// - image: BYTEA NULL (opaque bytes, no format enforced)
/// - owner_id: BIGINT NOT NULL REFERENCES owners(id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Assigned by the store on insert, never changes afterwards
    pub id: i64,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Price in the clinic's currency
    pub price: Option<f64>,

    /// Raw image bytes. `None` and `Some(vec![])` are distinct.
    #[serde(skip)]
    pub image: Option<Vec<u8>>,

    /// Owning veterinarian/user; fixed at creation
    pub owner_id: i64,
}

impl ServiceRecord {
    /// Check if the record carries image bytes.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A service record that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceRecord {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<Vec<u8>>,
    pub owner_id: i64,
}

impl NewServiceRecord {
    /// Attach the id handed out by the store.
    pub fn with_id(self, id: i64) -> ServiceRecord {
        ServiceRecord {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            owner_id: self.owner_id,
        }
    }
}

/// Field-by-field update of a [`ServiceRecord`].
///
/// `None` means "not mentioned, keep the stored value"; `Some(v)` means
/// "overwrite with `v`". There is no way to clear a field.
///
/// Text fields take any supplied value, including the empty string. The image
/// is the exception: an empty payload counts as "no change", since an empty
/// file part is what clients send when no file was picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<Vec<u8>>,
}

impl ServicePatch {
    /// True when applying the patch cannot change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.as_ref().map_or(true, |bytes| bytes.is_empty())
    }

    /// Merge the patch into `record`. The id and owner are never touched.
    pub fn apply(self, record: &mut ServiceRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(price) = self.price {
            record.price = Some(price);
        }
        if let Some(image) = self.image.filter(|bytes| !bytes.is_empty()) {
            record.image = Some(image);
        }
    }
}

/// Repository trait for ServiceRecord data access operations.
///
/// Listing methods return records in ascending id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRecordRepository: Send + Sync {
    /// List every stored record.
    async fn find_all(&self) -> Result<Vec<ServiceRecord>, AppError>;

    /// Find a record by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceRecord>, AppError>;

    /// Check whether a record with this id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Insert a new record; the store assigns the id.
    async fn insert(&self, record: NewServiceRecord) -> Result<ServiceRecord, AppError>;

    /// Overwrite an existing record by id.
    async fn save(&self, record: &ServiceRecord) -> Result<ServiceRecord, AppError>;

    /// Remove a record by id.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// List the records belonging to an owner.
    async fn find_by_owner_id(&self, owner_id: i64) -> Result<Vec<ServiceRecord>, AppError>;
}
