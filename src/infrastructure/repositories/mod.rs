//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgServiceRecordRepository** / **PgOwnerRepository** - PostgreSQL
//! - **InMemoryServiceRecordRepository** / **InMemoryOwnerRepository** -
//!   process-local, for database-less runs and tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use vet_services::infrastructure::repositories::{PgOwnerRepository, PgServiceRecordRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let service_repo = PgServiceRecordRepository::new(pool.clone());
//!     let owner_repo = PgOwnerRepository::new(pool);
//! }
//! ```

pub mod memory;
pub mod owner_repository;
pub mod service_record_repository;

pub use memory::{InMemoryOwnerRepository, InMemoryServiceRecordRepository};
pub use owner_repository::PgOwnerRepository;
pub use service_record_repository::PgServiceRecordRepository;
