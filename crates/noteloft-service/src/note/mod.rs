//! Tenant-scoped note operations.

pub mod service;

pub use service::NoteService;
