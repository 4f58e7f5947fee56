//! Route definitions for the `/gallery` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /                       -> list (?search= | ?category= | ?region=)
/// POST   /                       -> create
/// GET    /category/{category}    -> list_by_category
/// GET    /{slug}                 -> get_by_slug
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/category/{category}", get(gallery::list_by_category))
        .route(
            "/{key}",
            get(gallery::get_by_slug)
                .patch(gallery::update)
                .delete(gallery::delete),
        )
}
