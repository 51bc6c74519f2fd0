//! In-memory order repository for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use hawker_common::{Error, Result};

use crate::domain::entities::Order;
use crate::repository::OrderRepository;

#[derive(Default)]
pub struct MemoryOrderRepository {
    orders: Mutex<HashMap<Uuid, Order>>,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    fail_next_create: AtomicBool,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next create call fail once
    pub fn fail_next_create(&self) {
        self.fail_next_create.store(true, Ordering::SeqCst);
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.orders.lock().unwrap().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.buyer_id == buyer_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.ordered_at.cmp(&a.ordered_at));

        Ok(orders)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, order: &Order) -> Result<Order> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(Error::Internal("injected create failure".to_string()));
        }
        self.orders.lock().unwrap().insert(order.id, order.clone());

        Ok(order.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        Ok(self.orders.lock().unwrap().remove(&id).is_some())
    }
}
