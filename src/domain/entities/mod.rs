//! # Domain Entities
//!
//! Core domain entities of the service catalog. Each entity maps to a
//! database table.
//!
//! - **ServiceRecord**: a priced offering with an optional image
//! - **Owner**: the veterinarian/user a service record belongs to
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod owner;
mod service_record;

// Re-export ServiceRecord entity and related types
pub use service_record::{NewServiceRecord, ServicePatch, ServiceRecord, ServiceRecordRepository};

// Re-export Owner entity and related types
pub use owner::{Owner, OwnerRepository};

#[cfg(test)]
pub use owner::MockOwnerRepository;
#[cfg(test)]
pub use service_record::MockServiceRecordRepository;
