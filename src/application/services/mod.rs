//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ServiceRecordService**: the clinic's service catalog (CRUD, images,
//!   listing by owner)

pub mod service_record_service;

pub use service_record_service::{
    CreateServiceDto, EntityKind, ServiceError, ServiceRecordService, ServiceRecordServiceImpl,
};
