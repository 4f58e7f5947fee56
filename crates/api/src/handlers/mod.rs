//! Request handlers for the heritage collections.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the [`HeritageStore`](heritage_db::store::HeritageStore)
//! held in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod gallery;
pub mod pillars;
pub mod stats;
pub mod timeline;
