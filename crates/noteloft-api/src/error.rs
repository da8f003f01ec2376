//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl for `AppError` lives in `noteloft-core` (next to
//! the type, as the orphan rule requires); this module re-exports the
//! response body type and hosts the HTTP-mapping tests.

pub use noteloft_core::error::ApiErrorResponse;
