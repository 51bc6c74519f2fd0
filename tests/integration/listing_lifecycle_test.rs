//! End-to-end listing lifecycle over the in-memory adapters
//!
//! Exercises the full save chains (validate, upload, persist, compensate)
//! the way the HTTP handlers drive them, without a database or bucket.

use std::sync::Arc;

use bytes::Bytes;
use rust_decimal::Decimal;
use uuid::Uuid;

use hawker_common::Error;
use hawker_listings::{
    ImageUpload, ListingDraft, ListingFilter, ListingKind, ListingRepository, ListingWorkflow,
    MemoryListingRepository,
};
use hawker_storage::{BlobStore, MemoryBlobStore};

fn setup() -> (
    Arc<MemoryListingRepository>,
    Arc<MemoryBlobStore>,
    ListingWorkflow,
) {
    let repo = Arc::new(MemoryListingRepository::new());
    let blobs = Arc::new(MemoryBlobStore::new());
    let workflow = ListingWorkflow::new(repo.clone(), blobs.clone());
    (repo, blobs, workflow)
}

fn event_draft() -> ListingDraft {
    ListingDraft {
        title: "Harbour Night Market".to_string(),
        location: "Quay 4".to_string(),
        description: "Food stalls and live music".to_string(),
        date: "2025-09-20".to_string(),
        category: "food".to_string(),
        price: None,
    }
}

fn product_draft() -> ListingDraft {
    ListingDraft {
        title: "Woven Basket".to_string(),
        location: "Stall 7".to_string(),
        description: "Seagrass, medium".to_string(),
        date: "2025-09-20".to_string(),
        category: "homeware".to_string(),
        price: Some(Decimal::new(3500, 2)),
    }
}

fn jpeg(tag: &'static [u8]) -> ImageUpload {
    ImageUpload {
        data: Bytes::from_static(tag),
        content_type: "image/jpeg".to_string(),
    }
}

#[tokio::test]
async fn test_create_persists_fields_and_image_is_retrievable() {
    let (repo, blobs, workflow) = setup();
    let seller = Uuid::new_v4();

    let created = workflow
        .create(ListingKind::Event, seller, event_draft(), jpeg(b"event-image"))
        .await
        .unwrap();

    // Every submitted field persisted verbatim
    let stored = repo.find(created.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Harbour Night Market");
    assert_eq!(stored.location, "Quay 4");
    assert_eq!(stored.description, "Food stalls and live music");
    assert_eq!(stored.date, "2025-09-20");
    assert_eq!(stored.category, "food");
    assert_eq!(stored.seller_id, seller);

    // image_url resolves to the uploaded bytes
    let fetched = blobs.fetch(&stored.image_url).await.unwrap();
    assert_eq!(fetched, Bytes::from_static(b"event-image"));
}

#[tokio::test]
async fn test_validation_failure_makes_zero_remote_calls() {
    let (repo, blobs, workflow) = setup();

    let mut draft = event_draft();
    draft.title = String::new();
    draft.category = "  ".to_string();

    let err = workflow
        .create(ListingKind::Event, Uuid::new_v4(), draft, jpeg(b"x"))
        .await
        .unwrap_err();

    // error names every missing field
    let msg = err.to_string();
    assert!(msg.contains("title"));
    assert!(msg.contains("category"));
    assert!(matches!(err, Error::Validation(_)));

    assert_eq!(blobs.put_calls(), 0);
    assert_eq!(blobs.delete_calls(), 0);
    assert_eq!(
        repo.create_calls.load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn test_image_changing_edit_swaps_blob() {
    let (_, blobs, workflow) = setup();
    let seller = Uuid::new_v4();
    let created = workflow
        .create(ListingKind::Product, seller, product_draft(), jpeg(b"before"))
        .await
        .unwrap();

    let updated = workflow
        .update(created.id, seller, product_draft(), Some(jpeg(b"after")))
        .await
        .unwrap();

    assert_ne!(updated.image_url, created.image_url);
    // old blob unretrievable, new blob serves the new bytes
    assert!(blobs.fetch(&created.image_url).await.is_err());
    assert_eq!(
        blobs.fetch(&updated.image_url).await.unwrap(),
        Bytes::from_static(b"after")
    );
}

#[tokio::test]
async fn test_image_changing_edit_survives_old_blob_delete_failure() {
    let (_, blobs, workflow) = setup();
    let seller = Uuid::new_v4();
    let created = workflow
        .create(ListingKind::Event, seller, event_draft(), jpeg(b"before"))
        .await
        .unwrap();

    blobs.fail_next_delete();
    let updated = workflow
        .update(created.id, seller, event_draft(), Some(jpeg(b"after")))
        .await
        .unwrap();

    assert_ne!(updated.image_url, created.image_url);
    // the stale blob lingers until the sweep
    assert!(blobs.contains(&created.image_url));
    assert_eq!(workflow.sweep_orphans().await.unwrap(), 1);
    assert!(!blobs.contains(&created.image_url));
}

#[tokio::test]
async fn test_image_preserving_edit_makes_zero_blob_calls() {
    let (_, blobs, workflow) = setup();
    let seller = Uuid::new_v4();
    let created = workflow
        .create(ListingKind::Event, seller, event_draft(), jpeg(b"keep"))
        .await
        .unwrap();
    let puts = blobs.put_calls();
    let deletes = blobs.delete_calls();

    let mut draft = event_draft();
    draft.description = "Rescheduled".to_string();
    let updated = workflow.update(created.id, seller, draft, None).await.unwrap();

    assert_eq!(updated.image_url, created.image_url);
    assert_eq!(blobs.put_calls(), puts);
    assert_eq!(blobs.delete_calls(), deletes);
}

#[tokio::test]
async fn test_delete_removes_row_and_blob_and_list_state() {
    let (repo, blobs, workflow) = setup();
    let seller = Uuid::new_v4();
    let keep = workflow
        .create(ListingKind::Event, seller, event_draft(), jpeg(b"keep"))
        .await
        .unwrap();
    let gone = workflow
        .create(ListingKind::Event, seller, event_draft(), jpeg(b"gone"))
        .await
        .unwrap();

    workflow.delete(gone.id, seller).await.unwrap();

    let remaining = repo.list(ListingFilter::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert!(blobs.fetch(&gone.image_url).await.is_err());
    assert!(blobs.contains(&keep.image_url));
}

#[tokio::test]
async fn test_delete_survives_blob_failure_and_stays_deleted() {
    let (repo, blobs, workflow) = setup();
    let seller = Uuid::new_v4();
    let created = workflow
        .create(ListingKind::Product, seller, product_draft(), jpeg(b"x"))
        .await
        .unwrap();

    blobs.fail_next_delete();
    workflow.delete(created.id, seller).await.unwrap();

    // row gone even though the blob delete failed
    assert!(!repo.contains(created.id));
    // repository delete is idempotent: no re-appearance
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.list(ListingFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_compensation_leaves_no_orphan() {
    let (repo, blobs, workflow) = setup();
    repo.fail_next_create();

    let result = workflow
        .create(ListingKind::Event, Uuid::new_v4(), event_draft(), jpeg(b"x"))
        .await;

    assert!(result.is_err());
    assert!(blobs.is_empty());
    assert_eq!(workflow.sweep_orphans().await.unwrap(), 0);
}

#[tokio::test]
async fn test_sweep_removes_exactly_the_unreferenced_blobs() {
    let (_, blobs, workflow) = setup();
    let seller = Uuid::new_v4();
    let event = workflow
        .create(ListingKind::Event, seller, event_draft(), jpeg(b"e"))
        .await
        .unwrap();
    let product = workflow
        .create(ListingKind::Product, seller, product_draft(), jpeg(b"p"))
        .await
        .unwrap();

    // Simulate crash leftovers in both prefixes
    blobs.fail_next_delete();
    workflow.delete(event.id, seller).await.unwrap();
    let orphan_url = event.image_url.clone();

    let removed = workflow.sweep_orphans().await.unwrap();

    assert_eq!(removed, 1);
    assert!(!blobs.contains(&orphan_url));
    assert!(blobs.contains(&product.image_url));
}
