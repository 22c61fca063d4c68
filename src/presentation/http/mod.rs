//! HTTP Layer
//!
//! Routes, handlers, and multipart form parsing.

pub mod handlers;
pub mod multipart;
pub mod routes;
