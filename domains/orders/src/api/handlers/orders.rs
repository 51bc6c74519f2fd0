//! Order management API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hawker_auth::AuthUser;
use hawker_common::{Result, ValidatedJson};

use crate::api::middleware::OrdersState;
use crate::domain::entities::Order;

/// Request for placing an order
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    /// Listing being purchased
    pub listing_id: Uuid,

    /// Number of units (at least one)
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Order response DTO
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub listing_id: Uuid,
    pub product_name: String,
    pub product_price: Decimal,
    pub product_image: String,
    pub quantity: i32,
    pub ordered_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            buyer_id: o.buyer_id,
            listing_id: o.listing_id,
            product_name: o.product_name,
            product_price: o.product_price,
            product_image: o.product_image,
            quantity: o.quantity,
            ordered_at: o.ordered_at,
        }
    }
}

/// List the authenticated buyer's orders
pub async fn list_orders(
    AuthUser(ctx): AuthUser,
    State(state): State<OrdersState>,
) -> Result<Json<Vec<OrderResponse>>> {
    let orders = state.workflow.list_for(ctx.user.id).await?;
    let responses: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Place an order against a listing
pub async fn place_order(
    AuthUser(ctx): AuthUser,
    State(state): State<OrdersState>,
    ValidatedJson(req): ValidatedJson<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>)> {
    let created = state
        .workflow
        .place(ctx.user.id, req.listing_id, req.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Delete an order owned by the authenticated buyer
pub async fn delete_order(
    AuthUser(ctx): AuthUser,
    State(state): State<OrdersState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.workflow.remove(id, ctx.user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
