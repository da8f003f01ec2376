//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Body for creating or updating a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRequest {
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
}
