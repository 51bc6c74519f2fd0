//! Domain entities for the Listings domain

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hawker_common::{Error, Result};

/// Listing kind — one canonical `listings` table holds both, discriminated
/// by this column, so reads and writes can never target different
/// collections for the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "listing_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Event,
    Product,
}

impl ListingKind {
    /// Blob-key prefix for this kind's images
    pub fn storage_prefix(&self) -> &'static str {
        match self {
            ListingKind::Event => "events",
            ListingKind::Product => "products",
        }
    }

    /// Whether listings of this kind carry a price
    pub fn is_priced(&self) -> bool {
        matches!(self, ListingKind::Product)
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingKind::Event => write!(f, "event"),
            ListingKind::Product => write!(f, "product"),
        }
    }
}

/// Listing entity — a seller-authored event or product with an image asset.
///
/// `image_url` is only ever set from a completed blob upload; the workflow
/// owns that ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: Uuid,
    pub kind: ListingKind,
    pub seller_id: Uuid,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Free-form date text, kept as the seller typed it
    pub date: String,
    pub category: String,
    /// Present for products only
    pub price: Option<Decimal>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Build a new listing from a validated draft and an uploaded image URL.
    pub fn new(kind: ListingKind, seller_id: Uuid, draft: ListingDraft, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            seller_id,
            title: draft.title,
            location: draft.location,
            description: draft.description,
            date: draft.date,
            category: draft.category,
            price: if kind.is_priced() { draft.price } else { None },
            image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Field set a seller fills in while drafting a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub location: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub price: Option<Decimal>,
}

impl ListingDraft {
    /// Presence check on required fields, reporting every missing field by
    /// name in one error. Runs before any remote call; this is the only
    /// validation (no format or range rules beyond a positive price).
    pub fn validate(&self, kind: ListingKind) -> Result<()> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("location", &self.location),
            ("description", &self.description),
            ("date", &self.date),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }

        if kind.is_priced() && self.price.is_none() {
            missing.push("price");
        }

        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "Required fields missing: {}",
                missing.join(", ")
            )));
        }

        if let Some(price) = self.price {
            if price <= Decimal::ZERO {
                return Err(Error::Validation("Price must be positive".to_string()));
            }
        }

        Ok(())
    }

    /// Turn the draft into the overwrite set for an update, with the new
    /// image URL when the image changed.
    pub fn into_patch(self, kind: ListingKind, image_url: Option<String>) -> ListingPatch {
        ListingPatch {
            title: self.title,
            location: self.location,
            description: self.description,
            date: self.date,
            category: self.category,
            price: if kind.is_priced() { self.price } else { None },
            image_url,
        }
    }
}

/// Fields overwritten by a listing update. `image_url: None` means the
/// existing image reference is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPatch {
    pub title: String,
    pub location: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
}

impl ListingPatch {
    /// Apply the patch to an existing listing (in-memory repositories and
    /// optimistic list-state updates).
    pub fn apply(&self, listing: &mut Listing) {
        listing.title = self.title.clone();
        listing.location = self.location.clone();
        listing.description = self.description.clone();
        listing.date = self.date.clone();
        listing.category = self.category.clone();
        listing.price = self.price;
        if let Some(url) = &self.image_url {
            listing.image_url = url.clone();
        }
        listing.updated_at = Utc::now();
    }
}
