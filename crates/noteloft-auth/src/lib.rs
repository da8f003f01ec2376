//! # noteloft-auth
//!
//! Credential primitives for NoteLoft: Argon2id password hashing and
//! HS256-signed session tokens.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
