//! Route definitions for the `/pillars` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pillars;
use crate::state::AppState;

/// Routes mounted at `/pillars`.
///
/// Reads address a pillar by slug, writes by numeric id.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{slug}        -> get_by_slug
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pillars::list).post(pillars::create))
        .route(
            "/{key}",
            get(pillars::get_by_slug)
                .patch(pillars::update)
                .delete(pillars::delete),
        )
}
