//! Repository layer for the Orders domain

pub mod memory;
pub mod orders;

pub use memory::MemoryOrderRepository;
pub use orders::PgOrderRepository;

use async_trait::async_trait;
use uuid::Uuid;

use hawker_common::Result;

use crate::domain::entities::Order;

/// Persistence seam for orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List a buyer's orders, newest first
    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>>;

    /// Find an order by ID
    async fn find(&self, id: Uuid) -> Result<Option<Order>>;

    /// Persist a new order
    async fn create(&self, order: &Order) -> Result<Order>;

    /// Delete an order. Returns whether a row existed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
