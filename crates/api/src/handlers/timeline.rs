//! Handlers for the `/timeline` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use heritage_core::error::CoreError;
use heritage_core::types::DbId;
use heritage_db::models::timeline_era::{CreateTimelineEra, TimelineEra, UpdateTimelineEra};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// GET /api/timeline
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TimelineEra>>> {
    let eras = state.store.list_timeline_eras().await?;
    tracing::debug!(count = eras.len(), "Listed timeline eras");
    Ok(Json(eras))
}

/// GET /api/timeline/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> AppResult<Json<TimelineEra>> {
    let era = state
        .store
        .timeline_era_by_slug(&slug)
        .await?
        .ok_or_else(|| CoreError::slug_not_found(TimelineEra::ENTITY, &slug))?;
    Ok(Json(era))
}

/// POST /api/timeline
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTimelineEra>,
) -> AppResult<(StatusCode, Json<TimelineEra>)> {
    let era = state.store.create_timeline_era(&input).await?;
    tracing::info!(id = era.id, slug = %era.slug, "Timeline era created");
    Ok((StatusCode::CREATED, Json(era)))
}

/// PATCH /api/timeline/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateTimelineEra>,
) -> AppResult<Json<TimelineEra>> {
    let era = state
        .store
        .update_timeline_era(id, &input)
        .await?
        .ok_or_else(|| CoreError::id_not_found(TimelineEra::ENTITY, id))?;
    tracing::info!(id, "Timeline era updated");
    Ok(Json(era))
}

/// DELETE /api/timeline/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let removed = state.store.delete_timeline_era(id).await?;
    tracing::info!(id, removed, "Timeline era delete");
    Ok(StatusCode::NO_CONTENT)
}
