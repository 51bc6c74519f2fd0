//! Order placement and removal over the in-memory adapters

use std::sync::Arc;

use bytes::Bytes;
use rust_decimal::Decimal;
use uuid::Uuid;

use hawker_listings::{
    ImageUpload, ListingDraft, ListingKind, ListingWorkflow, MemoryListingRepository,
};
use hawker_common::Error;
use hawker_orders::{MemoryOrderRepository, Order, OrderRepository, OrderWorkflow};
use hawker_storage::MemoryBlobStore;

async fn seeded_product() -> (ListingWorkflow, hawker_listings::Listing) {
    let repo = Arc::new(MemoryListingRepository::new());
    let blobs = Arc::new(MemoryBlobStore::new());
    let workflow = ListingWorkflow::new(repo, blobs);

    let listing = workflow
        .create(
            ListingKind::Product,
            Uuid::new_v4(),
            ListingDraft {
                title: "Enamel Teapot".to_string(),
                location: "Stall 2".to_string(),
                description: "One litre".to_string(),
                date: "2025-09-20".to_string(),
                category: "kitchen".to_string(),
                price: Some(Decimal::new(4200, 2)),
            },
            ImageUpload {
                data: Bytes::from_static(b"teapot"),
                content_type: "image/jpeg".to_string(),
            },
        )
        .await
        .unwrap();

    (workflow, listing)
}

#[tokio::test]
async fn test_placed_order_snapshots_listing_and_survives_listing_edit() {
    let (workflow, listing) = seeded_product().await;
    let orders = MemoryOrderRepository::new();
    let buyer = Uuid::new_v4();

    let order = Order::place(buyer, &listing, 2).unwrap();
    orders.create(&order).await.unwrap();

    // Seller renames and reprices the listing afterwards
    workflow
        .update(
            listing.id,
            listing.seller_id,
            ListingDraft {
                title: "Renamed Teapot".to_string(),
                location: "Stall 2".to_string(),
                description: "One litre".to_string(),
                date: "2025-09-20".to_string(),
                category: "kitchen".to_string(),
                price: Some(Decimal::new(9900, 2)),
            },
            None,
        )
        .await
        .unwrap();

    // The order still shows what the buyer actually bought
    let stored = orders.find(order.id).await.unwrap().unwrap();
    assert_eq!(stored.product_name, "Enamel Teapot");
    assert_eq!(stored.product_price, Decimal::new(4200, 2));
    assert_eq!(stored.total(), Decimal::new(8400, 2));
}

#[tokio::test]
async fn test_order_removal_deletes_exactly_the_target() {
    let (_, listing) = seeded_product().await;
    let orders = MemoryOrderRepository::new();
    let buyer = Uuid::new_v4();

    let first = Order::place(buyer, &listing, 1).unwrap();
    let second = Order::place(buyer, &listing, 3).unwrap();
    orders.create(&first).await.unwrap();
    orders.create(&second).await.unwrap();

    assert!(orders.delete(first.id).await.unwrap());

    let remaining = orders.list_by_buyer(buyer).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    // Idempotent: a second delete reports nothing removed
    assert!(!orders.delete(first.id).await.unwrap());
}

#[tokio::test]
async fn test_foreign_buyer_orders_are_invisible_and_not_removable() {
    let (_, listing) = seeded_product().await;
    let orders = Arc::new(MemoryOrderRepository::new());
    let listings = Arc::new(MemoryListingRepository::new());
    listings.insert(listing.clone());
    let workflow = OrderWorkflow::new(orders.clone(), listings);

    let owner = Uuid::new_v4();
    let order = workflow.place(owner, listing.id, 1).await.unwrap();

    // Another buyer's listing view does not include it
    let other = Uuid::new_v4();
    assert!(orders.list_by_buyer(other).await.unwrap().is_empty());

    // Removal by the foreign buyer reads as NotFound and the row survives
    let err = workflow.remove(order.id, other).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(orders.contains(order.id));

    // The owner can still remove it
    workflow.remove(order.id, owner).await.unwrap();
    assert!(!orders.contains(order.id));
}

#[tokio::test]
async fn test_order_requires_priced_listing_and_positive_quantity() {
    let (_, listing) = seeded_product().await;

    assert!(Order::place(Uuid::new_v4(), &listing, 0).is_err());

    let mut unpriced = listing.clone();
    unpriced.price = None;
    assert!(Order::place(Uuid::new_v4(), &unpriced, 1).is_err());
}
