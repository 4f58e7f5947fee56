//! Repository for the `cultural_pillars` table.

use heritage_core::types::DbId;
use sqlx::PgPool;

use crate::models::pillar::{CreateCulturalPillar, CulturalPillar, UpdateCulturalPillar};

/// Column list for cultural_pillars queries.
const COLUMNS: &str = "id, slug, title, subtitle, description, image_url, image_alt, \
                       sort_order, created_at, updated_at";

/// Provides CRUD operations for cultural pillars.
pub struct PillarRepo;

impl PillarRepo {
    /// List all pillars in display order; ties fall back to insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CulturalPillar>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cultural_pillars ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, CulturalPillar>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a pillar by its exact, case-sensitive slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<CulturalPillar>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cultural_pillars WHERE slug = $1");
        sqlx::query_as::<_, CulturalPillar>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new pillar, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCulturalPillar,
    ) -> Result<CulturalPillar, sqlx::Error> {
        let query = format!(
            "INSERT INTO cultural_pillars
                (slug, title, subtitle, description, image_url, image_alt, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CulturalPillar>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.image_alt)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Merge the supplied fields into a pillar, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCulturalPillar,
    ) -> Result<Option<CulturalPillar>, sqlx::Error> {
        let query = format!(
            "UPDATE cultural_pillars SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                image_alt = COALESCE($6, image_alt),
                sort_order = COALESCE($7, sort_order),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CulturalPillar>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.image_alt)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pillar by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cultural_pillars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
