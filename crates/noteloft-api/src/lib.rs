//! # noteloft-api
//!
//! HTTP API layer for NoteLoft: Axum router, handlers, DTOs, the
//! authenticated-user extractor, and the `AppError` → HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
