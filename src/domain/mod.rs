//! # Domain Layer
//!
//! The domain layer holds the service catalog's entities and the repository
//! contracts the application layer depends on. It is independent of any
//! storage engine or HTTP framework.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Partial updates are explicit values ([`ServicePatch`]), not null checks

pub mod entities;

// Re-export commonly used types
pub use entities::*;
