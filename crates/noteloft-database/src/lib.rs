//! # noteloft-database
//!
//! PostgreSQL connection management, embedded migrations, repository
//! implementations, and the demo-data seeder.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
