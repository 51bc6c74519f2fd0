//! Domain entities for the Orders domain

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hawker_common::{Error, Result};
use hawker_listings::Listing;

/// A placed order.
///
/// Product display fields are snapshotted from the listing at purchase time,
/// so order history stays readable after the listing is edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub listing_id: Uuid,
    pub product_name: String,
    pub product_price: Decimal,
    pub product_image: String,
    pub quantity: i32,
    pub ordered_at: DateTime<Utc>,
}

impl Order {
    /// Place an order against a listing, snapshotting its display fields.
    pub fn place(buyer_id: Uuid, listing: &Listing, quantity: i32) -> Result<Self> {
        if quantity <= 0 {
            return Err(Error::Validation("Quantity must be positive".to_string()));
        }
        let price = listing
            .price
            .ok_or_else(|| Error::Validation("Listing is not purchasable".to_string()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            buyer_id,
            listing_id: listing.id,
            product_name: listing.title.clone(),
            product_price: price,
            product_image: listing.image_url.clone(),
            quantity,
            ordered_at: Utc::now(),
        })
    }

    /// Total price for the order
    pub fn total(&self) -> Decimal {
        self.product_price * Decimal::from(self.quantity)
    }
}
