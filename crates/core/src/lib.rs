//! Domain building blocks shared by the store and the HTTP layer.
//!
//! Nothing in this crate touches I/O: it holds the error taxonomy, the
//! primitive id and timestamp types, input validation rules and the
//! case-insensitive matching used by the gallery filters.

pub mod aspect_ratio;
pub mod error;
pub mod search;
pub mod types;
pub mod validation;
