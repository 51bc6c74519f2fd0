//! Orders domain: buyer purchases with snapshotted product details

pub mod api;
pub mod domain;
pub mod repository;
pub mod workflow;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Order;

// Re-export repository types
pub use repository::{MemoryOrderRepository, OrderRepository, PgOrderRepository};

// Re-export the workflow
pub use workflow::OrderWorkflow;

// Re-export API types
pub use api::routes;
pub use api::OrdersState;
