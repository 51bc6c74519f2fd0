//! Route definitions for Listings domain API

use axum::{routing::get, Router};

use super::handlers::listings;
use super::middleware::ListingsState;

/// Create all Listings domain API routes
pub fn routes() -> Router<ListingsState> {
    Router::new()
        .route(
            "/v1/listings",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route(
            "/v1/listings/{id}",
            get(listings::get_listing)
                .put(listings::update_listing)
                .delete(listings::delete_listing),
        )
}
