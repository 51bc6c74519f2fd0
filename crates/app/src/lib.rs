//! Hawker application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use hawker_accounts::{AccountsState, UserRepository};
use hawker_auth::{AuthBackend, AuthConfig};
use hawker_common::Config;
use hawker_listings::{ListingWorkflow, ListingsState, PgListingRepository};
use hawker_orders::{OrderWorkflow, OrdersState, PgOrderRepository};
use hawker_storage::BucketHttpStore;

/// Create the main application router with all routes and middleware.
///
/// Also returns the listing workflow so the server can run the startup
/// orphan sweep against the same adapters the handlers use.
pub async fn create_app(
    config: Config,
    pool: PgPool,
) -> Result<(Router, ListingWorkflow), anyhow::Error> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: std::env::var("JWT_ISSUER").ok(),
        audience: std::env::var("JWT_AUDIENCE").ok(),
    };
    let auth = AuthBackend::new(pool.clone(), auth_config);

    // Storage and repository adapters
    let blobs = Arc::new(BucketHttpStore::new(
        config.storage_url.clone(),
        config.storage_bucket.clone(),
        config.storage_service_key.clone(),
    ));
    let listing_repo = Arc::new(PgListingRepository::new(pool.clone()));
    let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));
    let workflow = ListingWorkflow::new(listing_repo.clone(), blobs);

    // Domain states
    let accounts_state = AccountsState {
        users: UserRepository::new(pool.clone()),
        auth: auth.clone(),
    };
    let listings_state = ListingsState {
        repo: listing_repo.clone(),
        workflow: workflow.clone(),
        auth: auth.clone(),
    };
    let orders_state = OrdersState {
        workflow: OrderWorkflow::new(order_repo, listing_repo),
        auth,
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Hawker API" }))
        .merge(hawker_accounts::routes().with_state(accounts_state))
        .merge(hawker_listings::routes().with_state(listings_state))
        .merge(hawker_orders::routes().with_state(orders_state));

    Ok((app, workflow))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
