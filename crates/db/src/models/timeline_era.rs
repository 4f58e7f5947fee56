//! Timeline era model.

use heritage_core::types::{DbId, Timestamp};
use heritage_core::validation::validate_slug;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `timeline_eras` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEra {
    pub id: DbId,
    pub slug: String,
    /// Display label for the span, e.g. `"322-185 BCE"`.
    pub era: String,
    pub title: String,
    pub period: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TimelineEra {
    pub const ENTITY: &'static str = "Timeline era";

    pub fn from_create(id: DbId, input: &CreateTimelineEra, now: Timestamp) -> Self {
        Self {
            id,
            slug: input.slug.clone(),
            era: input.era.clone(),
            title: input.title.clone(),
            period: input.period.clone(),
            description: input.description.clone(),
            image_url: input.image_url.clone(),
            image_alt: input.image_alt.clone(),
            sort_order: input.sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the fields present in `input`, leaving the rest untouched.
    pub fn apply(&mut self, input: &UpdateTimelineEra, now: Timestamp) {
        if let Some(era) = &input.era {
            self.era = era.clone();
        }
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(period) = &input.period {
            self.period = period.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(image_url) = &input.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(image_alt) = &input.image_alt {
            self.image_alt = image_alt.clone();
        }
        if let Some(sort_order) = input.sort_order {
            self.sort_order = sort_order;
        }
        self.updated_at = now;
    }
}

/// DTO for creating a new timeline era.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEra {
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub era: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub period: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[validate(length(min = 1))]
    pub image_alt: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a timeline era.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTimelineEra {
    #[validate(length(min = 1))]
    pub era: Option<String>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub period: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub image_alt: Option<String>,
    pub sort_order: Option<i32>,
}
