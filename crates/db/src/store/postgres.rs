//! PostgreSQL backing, delegating to the repositories.

use async_trait::async_trait;
use heritage_core::error::CoreError;
use heritage_core::search::fold;
use heritage_core::types::DbId;
use sqlx::PgPool;

use super::{check, HeritageStore};
use crate::error::classify;
use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::models::pillar::{CreateCulturalPillar, CulturalPillar, UpdateCulturalPillar};
use crate::models::timeline_era::{CreateTimelineEra, TimelineEra, UpdateTimelineEra};
use crate::repositories::{GalleryItemRepo, PillarRepo, TimelineEraRepo};

/// [`HeritageStore`] over a PostgreSQL pool.
///
/// Slug uniqueness is enforced by the `uq_*_slug` constraints; a violation
/// comes back as a validation error via [`classify`].
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

const PILLAR: &str = CulturalPillar::ENTITY;
const ERA: &str = TimelineEra::ENTITY;
const ITEM: &str = GalleryItem::ENTITY;

#[async_trait]
impl HeritageStore for PgStore {
    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| CoreError::Internal(format!("database unreachable: {e}")))
    }

    async fn list_pillars(&self) -> Result<Vec<CulturalPillar>, CoreError> {
        PillarRepo::list(&self.pool)
            .await
            .map_err(|e| classify(PILLAR, e))
    }

    async fn pillar_by_slug(&self, slug: &str) -> Result<Option<CulturalPillar>, CoreError> {
        PillarRepo::find_by_slug(&self.pool, slug)
            .await
            .map_err(|e| classify(PILLAR, e))
    }

    async fn create_pillar(
        &self,
        input: &CreateCulturalPillar,
    ) -> Result<CulturalPillar, CoreError> {
        check(PILLAR, input)?;
        PillarRepo::create(&self.pool, input)
            .await
            .map_err(|e| classify(PILLAR, e))
    }

    async fn update_pillar(
        &self,
        id: DbId,
        input: &UpdateCulturalPillar,
    ) -> Result<Option<CulturalPillar>, CoreError> {
        check(PILLAR, input)?;
        PillarRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| classify(PILLAR, e))
    }

    async fn delete_pillar(&self, id: DbId) -> Result<bool, CoreError> {
        PillarRepo::delete(&self.pool, id)
            .await
            .map_err(|e| classify(PILLAR, e))
    }

    async fn list_timeline_eras(&self) -> Result<Vec<TimelineEra>, CoreError> {
        TimelineEraRepo::list(&self.pool)
            .await
            .map_err(|e| classify(ERA, e))
    }

    async fn timeline_era_by_slug(&self, slug: &str) -> Result<Option<TimelineEra>, CoreError> {
        TimelineEraRepo::find_by_slug(&self.pool, slug)
            .await
            .map_err(|e| classify(ERA, e))
    }

    async fn create_timeline_era(
        &self,
        input: &CreateTimelineEra,
    ) -> Result<TimelineEra, CoreError> {
        check(ERA, input)?;
        TimelineEraRepo::create(&self.pool, input)
            .await
            .map_err(|e| classify(ERA, e))
    }

    async fn update_timeline_era(
        &self,
        id: DbId,
        input: &UpdateTimelineEra,
    ) -> Result<Option<TimelineEra>, CoreError> {
        check(ERA, input)?;
        TimelineEraRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| classify(ERA, e))
    }

    async fn delete_timeline_era(&self, id: DbId) -> Result<bool, CoreError> {
        TimelineEraRepo::delete(&self.pool, id)
            .await
            .map_err(|e| classify(ERA, e))
    }

    async fn list_gallery_items(&self) -> Result<Vec<GalleryItem>, CoreError> {
        GalleryItemRepo::list(&self.pool)
            .await
            .map_err(|e| classify(ITEM, e))
    }

    async fn gallery_item_by_slug(&self, slug: &str) -> Result<Option<GalleryItem>, CoreError> {
        GalleryItemRepo::find_by_slug(&self.pool, slug)
            .await
            .map_err(|e| classify(ITEM, e))
    }

    async fn gallery_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GalleryItem>, CoreError> {
        GalleryItemRepo::list_by_category(&self.pool, &fold(category))
            .await
            .map_err(|e| classify(ITEM, e))
    }

    async fn gallery_items_by_region(&self, region: &str) -> Result<Vec<GalleryItem>, CoreError> {
        GalleryItemRepo::list_by_region(&self.pool, &fold(region))
            .await
            .map_err(|e| classify(ITEM, e))
    }

    async fn search_gallery_items(&self, query: &str) -> Result<Vec<GalleryItem>, CoreError> {
        GalleryItemRepo::search(&self.pool, &fold(query))
            .await
            .map_err(|e| classify(ITEM, e))
    }

    async fn create_gallery_item(
        &self,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, CoreError> {
        check(ITEM, input)?;
        GalleryItemRepo::create(&self.pool, input)
            .await
            .map_err(|e| classify(ITEM, e))
    }

    async fn update_gallery_item(
        &self,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, CoreError> {
        check(ITEM, input)?;
        GalleryItemRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| classify(ITEM, e))
    }

    async fn delete_gallery_item(&self, id: DbId) -> Result<bool, CoreError> {
        GalleryItemRepo::delete(&self.pool, id)
            .await
            .map_err(|e| classify(ITEM, e))
    }
}
