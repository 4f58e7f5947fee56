//! Repository for the `gallery_items` table.
//!
//! The filter queries take needles already folded by
//! [`heritage_core::search::fold`] and compare against `LOWER(column)`.
//! `STRPOS` is used instead of `ILIKE` so `%` and `_` in a query are
//! matched literally.

use heritage_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};

/// Column list for gallery_items queries.
const COLUMNS: &str = "id, slug, title, category, region, description, detailed_description, \
                       image_url, image_alt, aspect_ratio, sort_order, created_at, updated_at";

const ORDER: &str = "ORDER BY sort_order ASC, id ASC";

/// Provides CRUD and filter operations for gallery items.
pub struct GalleryItemRepo;

impl GalleryItemRepo {
    /// List all gallery items in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items {ORDER}");
        sqlx::query_as::<_, GalleryItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a gallery item by its exact slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE slug = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Items whose category equals `folded_category` ignoring case.
    pub async fn list_by_category(
        pool: &PgPool,
        folded_category: &str,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE LOWER(category) = $1 {ORDER}");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(folded_category)
            .fetch_all(pool)
            .await
    }

    /// Items whose region equals `folded_region` ignoring case.
    pub async fn list_by_region(
        pool: &PgPool,
        folded_region: &str,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE LOWER(region) = $1 {ORDER}");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(folded_region)
            .fetch_all(pool)
            .await
    }

    /// Items where any of title, category, description or region contains
    /// `folded_query`.
    pub async fn search(pool: &PgPool, folded_query: &str) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_items
             WHERE STRPOS(LOWER(title), $1) > 0
                OR STRPOS(LOWER(category), $1) > 0
                OR STRPOS(LOWER(description), $1) > 0
                OR STRPOS(LOWER(COALESCE(region, '')), $1) > 0
             {ORDER}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(folded_query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new gallery item, returning the created row.
    ///
    /// `input.aspect_ratio` must already have passed validation; the table's
    /// CHECK constraint is the backstop.
    pub async fn create(pool: &PgPool, input: &CreateGalleryItem) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items
                (slug, title, category, region, description, detailed_description,
                 image_url, image_alt, aspect_ratio, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.region)
            .bind(&input.description)
            .bind(&input.detailed_description)
            .bind(&input.image_url)
            .bind(&input.image_alt)
            .bind(&input.aspect_ratio)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Merge the supplied fields into a gallery item, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_items SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                region = COALESCE($4, region),
                description = COALESCE($5, description),
                detailed_description = COALESCE($6, detailed_description),
                image_url = COALESCE($7, image_url),
                image_alt = COALESCE($8, image_alt),
                aspect_ratio = COALESCE($9, aspect_ratio),
                sort_order = COALESCE($10, sort_order),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.region)
            .bind(&input.description)
            .bind(&input.detailed_description)
            .bind(&input.image_url)
            .bind(&input.image_alt)
            .bind(&input.aspect_ratio)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
