pub mod gallery;
pub mod health;
pub mod pillars;
pub mod timeline;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pillars                       list, create
/// /pillars/{slug}                get by slug
/// /pillars/{id}                  update (PATCH), delete
///
/// /timeline                      list, create
/// /timeline/{slug}               get by slug
/// /timeline/{id}                 update (PATCH), delete
///
/// /gallery                       list (search/category/region), create
/// /gallery/category/{category}   list by category
/// /gallery/{slug}                get by slug
/// /gallery/{id}                  update (PATCH), delete
///
/// /stats                         aggregate counts and facets
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pillars", pillars::router())
        .nest("/timeline", timeline::router())
        .nest("/gallery", gallery::router())
        .route("/stats", get(handlers::stats::get))
}
