//! The storage contract behind the HTTP API.
//!
//! Handlers hold an `Arc<dyn HeritageStore>` and never see which backing is
//! in use. Both backings validate create/update input themselves, so the
//! contract holds no matter who calls it.

use std::collections::HashSet;

use async_trait::async_trait;
use heritage_core::error::CoreError;
use heritage_core::types::DbId;
use validator::Validate;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::models::pillar::{CreateCulturalPillar, CulturalPillar, UpdateCulturalPillar};
use crate::models::stats::HeritageStats;
use crate::models::timeline_era::{CreateTimelineEra, TimelineEra, UpdateTimelineEra};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Durable storage for pillars, timeline eras and gallery items.
///
/// List operations return records ordered by `sort_order` ascending with
/// ties in insertion order. Slug lookups are exact and case-sensitive.
/// `delete_*` is idempotent and reports whether a record was removed.
#[async_trait]
pub trait HeritageStore: Send + Sync {
    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), CoreError>;

    // --- Cultural pillars ---

    async fn list_pillars(&self) -> Result<Vec<CulturalPillar>, CoreError>;
    async fn pillar_by_slug(&self, slug: &str) -> Result<Option<CulturalPillar>, CoreError>;
    async fn create_pillar(&self, input: &CreateCulturalPillar)
        -> Result<CulturalPillar, CoreError>;
    async fn update_pillar(
        &self,
        id: DbId,
        input: &UpdateCulturalPillar,
    ) -> Result<Option<CulturalPillar>, CoreError>;
    async fn delete_pillar(&self, id: DbId) -> Result<bool, CoreError>;

    // --- Timeline eras ---

    async fn list_timeline_eras(&self) -> Result<Vec<TimelineEra>, CoreError>;
    async fn timeline_era_by_slug(&self, slug: &str) -> Result<Option<TimelineEra>, CoreError>;
    async fn create_timeline_era(&self, input: &CreateTimelineEra)
        -> Result<TimelineEra, CoreError>;
    async fn update_timeline_era(
        &self,
        id: DbId,
        input: &UpdateTimelineEra,
    ) -> Result<Option<TimelineEra>, CoreError>;
    async fn delete_timeline_era(&self, id: DbId) -> Result<bool, CoreError>;

    // --- Gallery items ---

    async fn list_gallery_items(&self) -> Result<Vec<GalleryItem>, CoreError>;
    async fn gallery_item_by_slug(&self, slug: &str) -> Result<Option<GalleryItem>, CoreError>;
    /// Items whose category equals `category`, ignoring case.
    async fn gallery_items_by_category(&self, category: &str)
        -> Result<Vec<GalleryItem>, CoreError>;
    /// Items whose region equals `region`, ignoring case.
    async fn gallery_items_by_region(&self, region: &str) -> Result<Vec<GalleryItem>, CoreError>;
    /// Items whose title, category, description or region contains `query`,
    /// ignoring case.
    async fn search_gallery_items(&self, query: &str) -> Result<Vec<GalleryItem>, CoreError>;
    async fn create_gallery_item(&self, input: &CreateGalleryItem)
        -> Result<GalleryItem, CoreError>;
    async fn update_gallery_item(
        &self,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, CoreError>;
    async fn delete_gallery_item(&self, id: DbId) -> Result<bool, CoreError>;

    /// Counts and distinct gallery facets, derived from current contents.
    async fn stats(&self) -> Result<HeritageStats, CoreError> {
        let pillars = self.list_pillars().await?;
        let eras = self.list_timeline_eras().await?;
        let items = self.list_gallery_items().await?;

        Ok(HeritageStats {
            total_pillars: pillars.len(),
            total_timeline_eras: eras.len(),
            total_gallery_items: items.len(),
            gallery_categories: distinct(items.iter().map(|item| item.category.as_str())),
            regions: distinct(items.iter().filter_map(|item| item.region.as_deref())),
        })
    }
}

/// Run `validator` on a DTO and convert failures into a domain error.
pub(crate) fn check<T: Validate>(entity: &'static str, input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| heritage_core::validation::validation_error(entity, &errors))
}

/// Distinct values in order of first appearance.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
