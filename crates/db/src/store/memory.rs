//! In-process backing used when no database is configured, and in tests.
//!
//! All three tables sit behind one `RwLock`; every write (including the
//! duplicate-slug check that precedes an insert) happens under a single
//! write guard, so each operation is atomic.

use async_trait::async_trait;
use chrono::Utc;
use heritage_core::aspect_ratio::AspectRatio;
use heritage_core::error::CoreError;
use heritage_core::search::{contains_folded, equals_folded, fold};
use heritage_core::types::DbId;
use tokio::sync::RwLock;

use super::{check, HeritageStore};
use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::models::pillar::{CreateCulturalPillar, CulturalPillar, UpdateCulturalPillar};
use crate::models::timeline_era::{CreateTimelineEra, TimelineEra, UpdateTimelineEra};

/// Accessors the generic table needs from a record.
trait Record: Clone {
    fn id(&self) -> DbId;
    fn slug(&self) -> &str;
    fn sort_order(&self) -> i32;
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> DbId {
                self.id
            }
            fn slug(&self) -> &str {
                &self.slug
            }
            fn sort_order(&self) -> i32 {
                self.sort_order
            }
        })*
    };
}

impl_record!(CulturalPillar, TimelineEra, GalleryItem);

/// One collection. Rows are kept in insertion order, which is also
/// ascending id order.
struct Table<T> {
    rows: Vec<T>,
    next_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Table<T> {
    /// Rows matching `keep`, in display order. The sort is stable, so ties
    /// stay in insertion order.
    fn select(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let mut rows: Vec<T> = self.rows.iter().filter(|&row| keep(row)).cloned().collect();
        rows.sort_by_key(|row| row.sort_order());
        rows
    }

    fn by_slug(&self, slug: &str) -> Option<T> {
        self.rows.iter().find(|row| row.slug() == slug).cloned()
    }

    fn insert(
        &mut self,
        entity: &'static str,
        slug: &str,
        build: impl FnOnce(DbId) -> T,
    ) -> Result<T, CoreError> {
        if self.rows.iter().any(|row| row.slug() == slug) {
            return Err(CoreError::duplicate_slug(entity));
        }
        let row = build(self.next_id);
        self.next_id += 1;
        self.rows.push(row.clone());
        Ok(row)
    }

    fn update(&mut self, id: DbId, merge: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.iter_mut().find(|row| row.id() == id)?;
        merge(row);
        Some(row.clone())
    }

    fn remove(&mut self, id: DbId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        self.rows.len() != before
    }
}

#[derive(Default)]
struct Tables {
    pillars: Table<CulturalPillar>,
    eras: Table<TimelineEra>,
    gallery: Table<GalleryItem>,
}

/// [`HeritageStore`] held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Parse an aspect ratio that already passed DTO validation.
fn parse_ratio(value: &str) -> Result<AspectRatio, CoreError> {
    value.parse().map_err(|_| CoreError::Validation {
        entity: GalleryItem::ENTITY,
        reason: "missing or invalid fields: aspectRatio".to_string(),
    })
}

#[async_trait]
impl HeritageStore for MemoryStore {
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn list_pillars(&self) -> Result<Vec<CulturalPillar>, CoreError> {
        Ok(self.tables.read().await.pillars.select(|_| true))
    }

    async fn pillar_by_slug(&self, slug: &str) -> Result<Option<CulturalPillar>, CoreError> {
        Ok(self.tables.read().await.pillars.by_slug(slug))
    }

    async fn create_pillar(
        &self,
        input: &CreateCulturalPillar,
    ) -> Result<CulturalPillar, CoreError> {
        check(CulturalPillar::ENTITY, input)?;
        let now = Utc::now();
        self.tables
            .write()
            .await
            .pillars
            .insert(CulturalPillar::ENTITY, &input.slug, |id| {
                CulturalPillar::from_create(id, input, now)
            })
    }

    async fn update_pillar(
        &self,
        id: DbId,
        input: &UpdateCulturalPillar,
    ) -> Result<Option<CulturalPillar>, CoreError> {
        check(CulturalPillar::ENTITY, input)?;
        let now = Utc::now();
        Ok(self
            .tables
            .write()
            .await
            .pillars
            .update(id, |row| row.apply(input, now)))
    }

    async fn delete_pillar(&self, id: DbId) -> Result<bool, CoreError> {
        Ok(self.tables.write().await.pillars.remove(id))
    }

    async fn list_timeline_eras(&self) -> Result<Vec<TimelineEra>, CoreError> {
        Ok(self.tables.read().await.eras.select(|_| true))
    }

    async fn timeline_era_by_slug(&self, slug: &str) -> Result<Option<TimelineEra>, CoreError> {
        Ok(self.tables.read().await.eras.by_slug(slug))
    }

    async fn create_timeline_era(
        &self,
        input: &CreateTimelineEra,
    ) -> Result<TimelineEra, CoreError> {
        check(TimelineEra::ENTITY, input)?;
        let now = Utc::now();
        self.tables
            .write()
            .await
            .eras
            .insert(TimelineEra::ENTITY, &input.slug, |id| {
                TimelineEra::from_create(id, input, now)
            })
    }

    async fn update_timeline_era(
        &self,
        id: DbId,
        input: &UpdateTimelineEra,
    ) -> Result<Option<TimelineEra>, CoreError> {
        check(TimelineEra::ENTITY, input)?;
        let now = Utc::now();
        Ok(self
            .tables
            .write()
            .await
            .eras
            .update(id, |row| row.apply(input, now)))
    }

    async fn delete_timeline_era(&self, id: DbId) -> Result<bool, CoreError> {
        Ok(self.tables.write().await.eras.remove(id))
    }

    async fn list_gallery_items(&self) -> Result<Vec<GalleryItem>, CoreError> {
        Ok(self.tables.read().await.gallery.select(|_| true))
    }

    async fn gallery_item_by_slug(&self, slug: &str) -> Result<Option<GalleryItem>, CoreError> {
        Ok(self.tables.read().await.gallery.by_slug(slug))
    }

    async fn gallery_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GalleryItem>, CoreError> {
        let needle = fold(category);
        Ok(self
            .tables
            .read()
            .await
            .gallery
            .select(|item| equals_folded(&item.category, &needle)))
    }

    async fn gallery_items_by_region(&self, region: &str) -> Result<Vec<GalleryItem>, CoreError> {
        let needle = fold(region);
        Ok(self.tables.read().await.gallery.select(|item| {
            item.region
                .as_deref()
                .is_some_and(|r| equals_folded(r, &needle))
        }))
    }

    async fn search_gallery_items(&self, query: &str) -> Result<Vec<GalleryItem>, CoreError> {
        let needle = fold(query);
        Ok(self.tables.read().await.gallery.select(|item| {
            contains_folded(&item.title, &needle)
                || contains_folded(&item.category, &needle)
                || contains_folded(&item.description, &needle)
                || item
                    .region
                    .as_deref()
                    .is_some_and(|r| contains_folded(r, &needle))
        }))
    }

    async fn create_gallery_item(
        &self,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, CoreError> {
        check(GalleryItem::ENTITY, input)?;
        let ratio = parse_ratio(&input.aspect_ratio)?;
        let now = Utc::now();
        self.tables
            .write()
            .await
            .gallery
            .insert(GalleryItem::ENTITY, &input.slug, |id| {
                GalleryItem::from_create(id, input, ratio, now)
            })
    }

    async fn update_gallery_item(
        &self,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, CoreError> {
        check(GalleryItem::ENTITY, input)?;
        let ratio = input.aspect_ratio.as_deref().map(parse_ratio).transpose()?;
        let now = Utc::now();
        Ok(self
            .tables
            .write()
            .await
            .gallery
            .update(id, |row| row.apply(input, ratio, now)))
    }

    async fn delete_gallery_item(&self, id: DbId) -> Result<bool, CoreError> {
        Ok(self.tables.write().await.gallery.remove(id))
    }
}
