//! API layer for the Listings domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ListingsState;
pub use routes::routes;
