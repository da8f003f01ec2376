//! # noteloft-service
//!
//! Business logic services for NoteLoft. Services orchestrate
//! repositories and auth primitives; every tenant-scoped operation takes
//! the per-request [`context::RequestContext`] rather than reading any
//! shared mutable state.

pub mod auth;
pub mod context;
pub mod note;
pub mod tenant;

pub use context::RequestContext;
