//! Note entity.

pub mod model;

pub use model::Note;
