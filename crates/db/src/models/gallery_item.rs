//! Gallery item model.

use heritage_core::aspect_ratio::{validate_aspect_ratio, AspectRatio};
use heritage_core::types::{DbId, Timestamp};
use heritage_core::validation::validate_slug;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `gallery_items` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub region: Option<String>,
    pub description: String,
    pub detailed_description: String,
    pub image_url: String,
    pub image_alt: String,
    #[sqlx(try_from = "String")]
    pub aspect_ratio: AspectRatio,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GalleryItem {
    pub const ENTITY: &'static str = "Gallery item";

    /// Build a fresh record from a validated create DTO.
    pub fn from_create(
        id: DbId,
        input: &CreateGalleryItem,
        aspect_ratio: AspectRatio,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            slug: input.slug.clone(),
            title: input.title.clone(),
            category: input.category.clone(),
            region: input.region.clone(),
            description: input.description.clone(),
            detailed_description: input.detailed_description.clone(),
            image_url: input.image_url.clone(),
            image_alt: input.image_alt.clone(),
            aspect_ratio,
            sort_order: input.sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the fields present in `input`, leaving the rest untouched.
    ///
    /// `aspect_ratio` is passed pre-parsed; the DTO carries it as text so an
    /// unknown value surfaces as a validation error rather than a body
    /// parse failure.
    pub fn apply(
        &mut self,
        input: &UpdateGalleryItem,
        aspect_ratio: Option<AspectRatio>,
        now: Timestamp,
    ) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(category) = &input.category {
            self.category = category.clone();
        }
        if let Some(region) = &input.region {
            self.region = Some(region.clone());
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(detailed) = &input.detailed_description {
            self.detailed_description = detailed.clone();
        }
        if let Some(image_url) = &input.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(image_alt) = &input.image_alt {
            self.image_alt = image_alt.clone();
        }
        if let Some(ratio) = aspect_ratio {
            self.aspect_ratio = ratio;
        }
        if let Some(sort_order) = input.sort_order {
            self.sort_order = sort_order;
        }
        self.updated_at = now;
    }
}

/// DTO for creating a new gallery item.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryItem {
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub region: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub detailed_description: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[validate(length(min = 1))]
    pub image_alt: String,
    #[validate(custom(function = "validate_aspect_ratio"))]
    pub aspect_ratio: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a gallery item.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateGalleryItem {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub region: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub detailed_description: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub image_alt: Option<String>,
    #[validate(custom(function = "validate_aspect_ratio"))]
    pub aspect_ratio: Option<String>,
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_input() -> CreateGalleryItem {
        CreateGalleryItem {
            slug: "kathakali".into(),
            title: "Kathakali Dance Drama".into(),
            category: "Performing Arts".into(),
            region: Some("Kerala".into()),
            description: "Classical dance-drama from Kerala".into(),
            detailed_description: "Elaborate costumes and makeup.".into(),
            image_url: "https://example.com/kathakali.jpg".into(),
            image_alt: "Kathakali dancer".into(),
            aspect_ratio: "square".into(),
            sort_order: 2,
        }
    }

    #[test]
    fn unknown_aspect_ratio_fails_validation() {
        let mut input = sample_input();
        input.aspect_ratio = "panorama".into();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("aspect_ratio"));
    }

    #[test]
    fn update_validates_supplied_aspect_ratio_only() {
        assert!(UpdateGalleryItem::default().validate().is_ok());

        let update = UpdateGalleryItem {
            aspect_ratio: Some("wide".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn apply_keeps_region_when_absent() {
        let now = Utc::now();
        let mut item = GalleryItem::from_create(1, &sample_input(), AspectRatio::Square, now);

        item.apply(
            &UpdateGalleryItem {
                category: Some("Dance".into()),
                ..Default::default()
            },
            None,
            now,
        );

        assert_eq!(item.category, "Dance");
        assert_eq!(item.region.as_deref(), Some("Kerala"));
        assert_eq!(item.aspect_ratio, AspectRatio::Square);
    }

    #[test]
    fn serializes_region_as_null_and_ratio_lowercase() {
        let mut input = sample_input();
        input.region = None;
        let item = GalleryItem::from_create(4, &input, AspectRatio::Portrait, Utc::now());

        let json = serde_json::to_value(&item).unwrap();
        assert!(json["region"].is_null());
        assert_eq!(json["aspectRatio"], "portrait");
        assert_eq!(json["detailedDescription"], "Elaborate costumes and makeup.");
    }
}
