//! # noteloft-core
//!
//! Core crate for NoteLoft. Contains configuration schemas and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other NoteLoft crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
