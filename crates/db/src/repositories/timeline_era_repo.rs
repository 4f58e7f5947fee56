//! Repository for the `timeline_eras` table.

use heritage_core::types::DbId;
use sqlx::PgPool;

use crate::models::timeline_era::{CreateTimelineEra, TimelineEra, UpdateTimelineEra};

/// Column list for timeline_eras queries.
const COLUMNS: &str = "id, slug, era, title, period, description, image_url, image_alt, \
                       sort_order, created_at, updated_at";

/// Provides CRUD operations for timeline eras.
pub struct TimelineEraRepo;

impl TimelineEraRepo {
    /// List all eras in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TimelineEra>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM timeline_eras ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, TimelineEra>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an era by its exact slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<TimelineEra>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM timeline_eras WHERE slug = $1");
        sqlx::query_as::<_, TimelineEra>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new era, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTimelineEra) -> Result<TimelineEra, sqlx::Error> {
        let query = format!(
            "INSERT INTO timeline_eras
                (slug, era, title, period, description, image_url, image_alt, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineEra>(&query)
            .bind(&input.slug)
            .bind(&input.era)
            .bind(&input.title)
            .bind(&input.period)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.image_alt)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Merge the supplied fields into an era, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTimelineEra,
    ) -> Result<Option<TimelineEra>, sqlx::Error> {
        let query = format!(
            "UPDATE timeline_eras SET
                era = COALESCE($2, era),
                title = COALESCE($3, title),
                period = COALESCE($4, period),
                description = COALESCE($5, description),
                image_url = COALESCE($6, image_url),
                image_alt = COALESCE($7, image_alt),
                sort_order = COALESCE($8, sort_order),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineEra>(&query)
            .bind(id)
            .bind(&input.era)
            .bind(&input.title)
            .bind(&input.period)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.image_alt)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an era by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM timeline_eras WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
