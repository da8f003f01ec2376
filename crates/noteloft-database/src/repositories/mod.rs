//! Repository implementations over the PostgreSQL pool.
//!
//! Every query scoped to a tenant predicates on `tenant_id` directly in
//! SQL, so cross-tenant rows are never even fetched.

pub mod note;
pub mod tenant;
pub mod user;

pub use note::NoteRepository;
pub use tenant::TenantRepository;
pub use user::UserRepository;
