//! # noteloft-entity
//!
//! Domain entity models for NoteLoft: tenants, users, and notes.

pub mod note;
pub mod tenant;
pub mod user;
