//! Route definitions for Orders domain API

use axum::{routing::get, Router};

use super::handlers::orders;
use super::middleware::OrdersState;

/// Create all Orders domain API routes
pub fn routes() -> Router<OrdersState> {
    Router::new()
        .route(
            "/v1/orders",
            get(orders::list_orders).post(orders::place_order),
        )
        .route("/v1/orders/{id}", axum::routing::delete(orders::delete_order))
}
