//! Postgres-backed order repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hawker_common::Result;

use crate::domain::entities::Order;
use crate::repository::OrderRepository;

/// All columns in the orders table, used for SELECT and RETURNING clauses.
const ORDER_COLUMNS: &str = "\
    id, buyer_id, listing_id, \
    product_name, product_price, product_image, \
    quantity, ordered_at";

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE buyer_id = $1 ORDER BY ordered_at DESC"
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(buyer_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    async fn create(&self, order: &Order) -> Result<Order> {
        let query = format!(
            "INSERT INTO orders ({ORDER_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ORDER_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Order>(&query)
            .bind(order.id)
            .bind(order.buyer_id)
            .bind(order.listing_id)
            .bind(&order.product_name)
            .bind(order.product_price)
            .bind(&order.product_image)
            .bind(order.quantity)
            .bind(order.ordered_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
