//! Tenant entity and plan enumeration.

pub mod model;
pub mod plan;

pub use model::Tenant;
pub use plan::TenantPlan;
