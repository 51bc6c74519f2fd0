//! Order workflow: placement and owner-checked removal
//!
//! Placement reads the listing to snapshot its display fields before the
//! insert. Removal loads the order and checks the buyer owns it before
//! deleting; a foreign id reads as NotFound so buyers cannot probe for
//! other people's order ids.

use std::sync::Arc;

use uuid::Uuid;

use hawker_common::{Error, Result};
use hawker_listings::ListingRepository;

use crate::domain::entities::Order;
use crate::repository::OrderRepository;

/// Orchestrates order mutations against the order and listing repositories
#[derive(Clone)]
pub struct OrderWorkflow {
    repo: Arc<dyn OrderRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl OrderWorkflow {
    pub fn new(repo: Arc<dyn OrderRepository>, listings: Arc<dyn ListingRepository>) -> Self {
        Self { repo, listings }
    }

    /// List the buyer's orders, newest first
    pub async fn list_for(&self, buyer_id: Uuid) -> Result<Vec<Order>> {
        self.repo.list_by_buyer(buyer_id).await
    }

    /// Place an order against a listing, snapshotting its display fields
    pub async fn place(&self, buyer_id: Uuid, listing_id: Uuid, quantity: i32) -> Result<Order> {
        let listing = self
            .listings
            .find(listing_id)
            .await?
            .ok_or_else(|| Error::NotFound("Listing not found".to_string()))?;

        let order = Order::place(buyer_id, &listing, quantity)?;

        self.repo.create(&order).await
    }

    /// Remove an order owned by `buyer_id`. Foreign and missing ids both
    /// come back as NotFound, and a foreign id leaves the row untouched.
    pub async fn remove(&self, id: Uuid, buyer_id: Uuid) -> Result<()> {
        let order = self
            .repo
            .find(id)
            .await?
            .ok_or_else(|| Error::NotFound("Order not found".to_string()))?;
        if order.buyer_id != buyer_id {
            return Err(Error::NotFound("Order not found".to_string()));
        }

        self.repo.delete(id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryOrderRepository;
    use hawker_listings::{Listing, ListingDraft, ListingKind, MemoryListingRepository};
    use rust_decimal::Decimal;
    use std::sync::atomic::Ordering;

    fn product() -> Listing {
        Listing::new(
            ListingKind::Product,
            Uuid::new_v4(),
            ListingDraft {
                title: "Woven Basket".to_string(),
                location: "Stall 7".to_string(),
                description: "Seagrass".to_string(),
                date: "2025-09-01".to_string(),
                category: "homeware".to_string(),
                price: Some(Decimal::new(1800, 2)),
            },
            "memory://products/1_1.jpg".to_string(),
        )
    }

    fn workflow() -> (
        Arc<MemoryOrderRepository>,
        Arc<MemoryListingRepository>,
        OrderWorkflow,
    ) {
        let repo = Arc::new(MemoryOrderRepository::new());
        let listings = Arc::new(MemoryListingRepository::new());
        let workflow = OrderWorkflow::new(repo.clone(), listings.clone());
        (repo, listings, workflow)
    }

    #[tokio::test]
    async fn test_place_snapshots_the_listing() {
        let (repo, listings, workflow) = workflow();
        let listing = product();
        listings.insert(listing.clone());
        let buyer = Uuid::new_v4();

        let order = workflow.place(buyer, listing.id, 2).await.unwrap();

        assert_eq!(order.buyer_id, buyer);
        assert_eq!(order.product_name, listing.title);
        assert_eq!(order.product_price, Decimal::new(1800, 2));
        assert!(repo.contains(order.id));
    }

    #[tokio::test]
    async fn test_place_against_missing_listing_is_not_found() {
        let (repo, _, workflow) = workflow();

        let err = workflow
            .place(Uuid::new_v4(), Uuid::new_v4(), 1)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(repo.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remove_deletes_owned_order() {
        let (repo, listings, workflow) = workflow();
        let listing = product();
        listings.insert(listing.clone());
        let buyer = Uuid::new_v4();
        let order = workflow.place(buyer, listing.id, 1).await.unwrap();

        workflow.remove(order.id, buyer).await.unwrap();

        assert!(!repo.contains(order.id));
    }

    #[tokio::test]
    async fn test_remove_foreign_order_is_not_found() {
        let (repo, listings, workflow) = workflow();
        let listing = product();
        listings.insert(listing.clone());
        let owner = Uuid::new_v4();
        let order = workflow.place(owner, listing.id, 1).await.unwrap();

        let err = workflow
            .remove(order.id, Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
        // row survives; nothing reached the delete
        assert!(repo.contains(order.id));
        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remove_missing_order_is_not_found() {
        let (_, _, workflow) = workflow();

        let err = workflow
            .remove(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
    }
}
