//! Listing management API handlers
//!
//! Create and update take `multipart/form-data`: text fields plus an `image`
//! part. Field presence is checked by the draft validator so a request
//! missing several fields gets them all reported at once.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hawker_auth::{AuthUser, SellerUser};
use hawker_common::{Error, Result};

use crate::api::middleware::ListingsState;
use crate::domain::entities::{Listing, ListingDraft, ListingKind};
use crate::repository::ListingFilter;
use crate::workflow::ImageUpload;

/// Query parameters for listing listings
#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub kind: Option<ListingKind>,
    /// When true, restrict to the caller's own listings
    #[serde(default)]
    pub mine: bool,
}

/// Listing response DTO
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub id: Uuid,
    pub kind: ListingKind,
    pub seller_id: Uuid,
    pub title: String,
    pub location: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub price: Option<Decimal>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(l: Listing) -> Self {
        Self {
            id: l.id,
            kind: l.kind,
            seller_id: l.seller_id,
            title: l.title,
            location: l.location,
            description: l.description,
            date: l.date,
            category: l.category,
            price: l.price,
            image_url: l.image_url,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

/// List listings, optionally filtered by kind and ownership
pub async fn list_listings(
    AuthUser(ctx): AuthUser,
    State(state): State<ListingsState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ListingResponse>>> {
    let mut filter = ListingFilter {
        kind: query.kind,
        seller_id: None,
    };
    if query.mine {
        filter.seller_id = Some(ctx.user.id);
    }

    let listings = state.repo.list(filter).await?;
    let responses: Vec<ListingResponse> = listings.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a single listing by ID
pub async fn get_listing(
    AuthUser(_ctx): AuthUser,
    State(state): State<ListingsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingResponse>> {
    let listing = state
        .repo
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Listing not found".to_string()))?;

    Ok(Json(listing.into()))
}

/// Create a listing from a multipart form
pub async fn create_listing(
    SellerUser(ctx): SellerUser,
    State(state): State<ListingsState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ListingResponse>)> {
    let form = ListingForm::parse(multipart).await?;
    let kind = form.require_kind()?;
    let image = form.require_image()?;

    let created = state
        .workflow
        .create(kind, ctx.user.id, form.draft, image)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update a listing from a multipart form. The `image` part is optional;
/// when absent the stored image is kept.
pub async fn update_listing(
    SellerUser(ctx): SellerUser,
    State(state): State<ListingsState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ListingResponse>> {
    let form = ListingForm::parse(multipart).await?;

    let updated = state
        .workflow
        .update(id, ctx.user.id, form.draft, form.image)
        .await?;

    Ok(Json(updated.into()))
}

/// Delete a listing and its image
pub async fn delete_listing(
    SellerUser(ctx): SellerUser,
    State(state): State<ListingsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.workflow.delete(id, ctx.user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fields collected from a listing multipart form. Text fields default to
/// empty so the draft validator reports every missing field by name.
struct ListingForm {
    draft: ListingDraft,
    kind: Option<ListingKind>,
    image: Option<ImageUpload>,
}

impl ListingForm {
    async fn parse(mut multipart: Multipart) -> Result<Self> {
        let mut draft = ListingDraft::default();
        let mut kind = None;
        let mut image = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| Error::Validation(format!("Malformed multipart body: {e}")))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "image" {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("Failed to read image: {e}")))?;
                image = Some(ImageUpload { data, content_type });
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| Error::Validation(format!("Failed to read field '{name}': {e}")))?;

            match name.as_str() {
                "title" => draft.title = value,
                "location" => draft.location = value,
                "description" => draft.description = value,
                "date" => draft.date = value,
                "category" => draft.category = value,
                "price" => {
                    let price: Decimal = value
                        .parse()
                        .map_err(|_| Error::Validation("Invalid price".to_string()))?;
                    draft.price = Some(price);
                }
                "kind" => {
                    kind = Some(match value.as_str() {
                        "event" => ListingKind::Event,
                        "product" => ListingKind::Product,
                        other => {
                            return Err(Error::Validation(format!(
                                "Unknown listing kind '{other}'"
                            )))
                        }
                    });
                }
                // Unknown fields are ignored
                _ => {}
            }
        }

        Ok(Self { draft, kind, image })
    }

    fn require_kind(&self) -> Result<ListingKind> {
        self.kind
            .ok_or_else(|| Error::Validation("Required fields missing: kind".to_string()))
    }

    fn require_image(&self) -> Result<ImageUpload> {
        self.image
            .clone()
            .ok_or_else(|| Error::Validation("Required fields missing: image".to_string()))
    }
}
