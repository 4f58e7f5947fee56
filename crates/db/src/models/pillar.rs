//! Cultural pillar model.

use heritage_core::types::{DbId, Timestamp};
use heritage_core::validation::validate_slug;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cultural_pillars` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CulturalPillar {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CulturalPillar {
    /// Entity name used in errors and logs.
    pub const ENTITY: &'static str = "Pillar";

    /// Build a fresh record from a validated create DTO.
    pub fn from_create(id: DbId, input: &CreateCulturalPillar, now: Timestamp) -> Self {
        Self {
            id,
            slug: input.slug.clone(),
            title: input.title.clone(),
            subtitle: input.subtitle.clone(),
            description: input.description.clone(),
            image_url: input.image_url.clone(),
            image_alt: input.image_alt.clone(),
            sort_order: input.sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the fields present in `input`, leaving the rest untouched.
    pub fn apply(&mut self, input: &UpdateCulturalPillar, now: Timestamp) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(subtitle) = &input.subtitle {
            self.subtitle = subtitle.clone();
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

/// DTO for creating a new pillar.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCulturalPillar {
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub subtitle: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[validate(length(min = 1))]
    pub image_alt: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a pillar. The slug is immutable and not accepted here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCulturalPillar {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub subtitle: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub image_alt: Option<String>,
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn sample_input() -> CreateCulturalPillar {
        CreateCulturalPillar {
            slug: "architecture".into(),
            title: "Indian Architecture".into(),
            subtitle: "Temples, Palaces & Sacred Spaces".into(),
            description: "Millennia of spiritual and artistic evolution.".into(),
            image_url: "https://example.com/temple.jpg".into(),
            image_alt: "Temple carvings".into(),
            sort_order: 1,
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let created = Utc::now();
        let mut pillar = CulturalPillar::from_create(1, &sample_input(), created);
        let before = pillar.clone();

        let later = created + Duration::seconds(5);
        pillar.apply(
            &UpdateCulturalPillar {
                title: Some("Sacred Architecture".into()),
                ..Default::default()
            },
            later,
        );

        assert_eq!(pillar.title, "Sacred Architecture");
        assert_eq!(pillar.updated_at, later);
        assert_eq!(pillar.created_at, before.created_at);
        assert_eq!(
            CulturalPillar {
                title: before.title.clone(),
                updated_at: before.updated_at,
                ..pillar.clone()
            },
            before
        );
    }

    #[test]
    fn create_dto_rejects_empty_title_and_bad_slug() {
        let mut input = sample_input();
        input.title = String::new();
        input.slug = "Not A Slug".into();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("slug"));
        assert!(!fields.contains_key("subtitle"));
    }

    #[test]
    fn update_dto_rejects_slug_field() {
        let result: Result<UpdateCulturalPillar, _> =
            serde_json::from_value(serde_json::json!({ "slug": "renamed" }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let pillar = CulturalPillar::from_create(3, &sample_input(), Utc::now());
        let json = serde_json::to_value(&pillar).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["imageUrl"], "https://example.com/temple.jpg");
        assert_eq!(json["sortOrder"], 1);
        assert!(json["createdAt"].is_string());
        assert!(json.get("image_url").is_none());
    }
}
