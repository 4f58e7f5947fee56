//! Handlers for the `/gallery` resource.
//!
//! The list endpoint applies at most one filter, chosen by
//! [`GalleryFilter::from_params`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use heritage_core::error::CoreError;
use heritage_core::search::GalleryFilter;
use heritage_core::types::DbId;
use heritage_db::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query parameters for `GET /api/gallery`.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
}

/// GET /api/gallery?search=&category=&region=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<GalleryListParams>,
) -> AppResult<Json<Vec<GalleryItem>>> {
    let filter = GalleryFilter::from_params(
        params.search.as_deref(),
        params.category.as_deref(),
        params.region.as_deref(),
    );

    let items = match &filter {
        GalleryFilter::Search(query) => state.store.search_gallery_items(query).await?,
        GalleryFilter::Category(category) => {
            state.store.gallery_items_by_category(category).await?
        }
        GalleryFilter::Region(region) => state.store.gallery_items_by_region(region).await?,
        GalleryFilter::All => state.store.list_gallery_items().await?,
    };

    tracing::debug!(count = items.len(), ?filter, "Listed gallery items");
    Ok(Json(items))
}

/// GET /api/gallery/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    ApiPath(category): ApiPath<String>,
) -> AppResult<Json<Vec<GalleryItem>>> {
    let items = state.store.gallery_items_by_category(&category).await?;
    tracing::debug!(count = items.len(), category = %category, "Listed gallery category");
    Ok(Json(items))
}

/// GET /api/gallery/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> AppResult<Json<GalleryItem>> {
    let item = state
        .store
        .gallery_item_by_slug(&slug)
        .await?
        .ok_or_else(|| CoreError::slug_not_found(GalleryItem::ENTITY, &slug))?;
    Ok(Json(item))
}

/// POST /api/gallery
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGalleryItem>,
) -> AppResult<(StatusCode, Json<GalleryItem>)> {
    let item = state.store.create_gallery_item(&input).await?;
    tracing::info!(id = item.id, slug = %item.slug, "Gallery item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/gallery/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateGalleryItem>,
) -> AppResult<Json<GalleryItem>> {
    let item = state
        .store
        .update_gallery_item(id, &input)
        .await?
        .ok_or_else(|| CoreError::id_not_found(GalleryItem::ENTITY, id))?;
    tracing::info!(id, "Gallery item updated");
    Ok(Json(item))
}

/// DELETE /api/gallery/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let removed = state.store.delete_gallery_item(id).await?;
    tracing::info!(id, removed, "Gallery item delete");
    Ok(StatusCode::NO_CONTENT)
}
