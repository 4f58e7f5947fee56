//! Handlers for the `/pillars` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use heritage_core::error::CoreError;
use heritage_core::types::DbId;
use heritage_db::models::pillar::{CreateCulturalPillar, CulturalPillar, UpdateCulturalPillar};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// GET /api/pillars
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CulturalPillar>>> {
    let pillars = state.store.list_pillars().await?;
    tracing::debug!(count = pillars.len(), "Listed pillars");
    Ok(Json(pillars))
}

/// GET /api/pillars/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> AppResult<Json<CulturalPillar>> {
    let pillar = state
        .store
        .pillar_by_slug(&slug)
        .await?
        .ok_or_else(|| CoreError::slug_not_found(CulturalPillar::ENTITY, &slug))?;
    Ok(Json(pillar))
}

/// POST /api/pillars
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCulturalPillar>,
) -> AppResult<(StatusCode, Json<CulturalPillar>)> {
    let pillar = state.store.create_pillar(&input).await?;
    tracing::info!(id = pillar.id, slug = %pillar.slug, "Pillar created");
    Ok((StatusCode::CREATED, Json(pillar)))
}

/// PATCH /api/pillars/{id}
///
/// Merge the supplied fields. The slug cannot be changed.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateCulturalPillar>,
) -> AppResult<Json<CulturalPillar>> {
    let pillar = state
        .store
        .update_pillar(id, &input)
        .await?
        .ok_or_else(|| CoreError::id_not_found(CulturalPillar::ENTITY, id))?;
    tracing::info!(id, "Pillar updated");
    Ok(Json(pillar))
}

/// DELETE /api/pillars/{id}
///
/// Idempotent: answers 204 whether or not the pillar existed.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let removed = state.store.delete_pillar(id).await?;
    tracing::info!(id, removed, "Pillar delete");
    Ok(StatusCode::NO_CONTENT)
}
