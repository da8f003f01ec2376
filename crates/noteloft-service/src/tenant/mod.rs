//! Tenant plan management.

pub mod service;

pub use service::TenantService;
