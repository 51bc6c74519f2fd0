//! Postgres-backed listing repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hawker_common::Result;

use crate::domain::entities::{Listing, ListingPatch};
use crate::repository::{ListingFilter, ListingRepository};

/// All columns in the listings table, used for SELECT and RETURNING clauses.
const LISTING_COLUMNS: &str = "\
    id, kind, seller_id, \
    title, location, description, date, category, price, \
    image_url, created_at, updated_at";

#[derive(Clone)]
pub struct PgListingRepository {
    pool: PgPool,
}

impl PgListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        let query = format!(
            "SELECT {LISTING_COLUMNS} FROM listings \
             WHERE ($1::listing_kind IS NULL OR kind = $1) \
               AND ($2::uuid IS NULL OR seller_id = $2) \
             ORDER BY created_at DESC"
        );
        let listings = sqlx::query_as::<_, Listing>(&query)
            .bind(filter.kind)
            .bind(filter.seller_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(listings)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Listing>> {
        let query = format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = $1");
        let listing = sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(listing)
    }

    async fn create(&self, listing: &Listing) -> Result<Listing> {
        let query = format!(
            "INSERT INTO listings ({LISTING_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {LISTING_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Listing>(&query)
            .bind(listing.id)
            .bind(listing.kind)
            .bind(listing.seller_id)
            .bind(&listing.title)
            .bind(&listing.location)
            .bind(&listing.description)
            .bind(&listing.date)
            .bind(&listing.category)
            .bind(listing.price)
            .bind(&listing.image_url)
            .bind(listing.created_at)
            .bind(listing.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn update(&self, id: Uuid, patch: &ListingPatch) -> Result<Option<Listing>> {
        // COALESCE keeps the stored image reference when the patch has none.
        let query = format!(
            "UPDATE listings SET \
                title = $2, location = $3, description = $4, \
                date = $5, category = $6, price = $7, \
                image_url = COALESCE($8, image_url), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {LISTING_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.location)
            .bind(&patch.description)
            .bind(&patch.date)
            .bind(&patch.category)
            .bind(patch.price)
            .bind(&patch.image_url)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
