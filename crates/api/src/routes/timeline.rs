//! Route definitions for the `/timeline` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// Routes mounted at `/timeline`.
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
        .route("/", get(timeline::list).post(timeline::create))
        .route(
            "/{key}",
            get(timeline::get_by_slug)
                .patch(timeline::update)
                .delete(timeline::delete),
        )
}
