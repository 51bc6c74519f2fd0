//! API layer for the Orders domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::OrdersState;
pub use routes::routes;
