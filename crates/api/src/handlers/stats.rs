//! Handler for `/stats`.

use axum::extract::State;
use axum::Json;
use heritage_db::models::stats::HeritageStats;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> AppResult<Json<HeritageStats>> {
    let stats = state.store.stats().await?;
    Ok(Json(stats))
}
