//! Order endpoints, including the shipping approval action.

use anyhow::{Context, Result};

use shopdesk_core::models::{Order, OrderStatus, Page, PageQuery};

use crate::{api_prefix, ApiClient};

impl ApiClient {
    /// List orders with pagination and an optional status filter.
    pub async fn list_orders(
        &self,
        page: PageQuery,
        status: Option<OrderStatus>,
    ) -> Result<Page<Order>> {
        let mut query = page.to_query();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        self.get(&format!("{}/orders", api_prefix()), &query).await
    }

    pub async fn get_order(&self, order_id: i64) -> Result<Order> {
        self.get(&format!("{}/orders/{}", api_prefix(), order_id), &[])
            .await
    }

    /// Fetch a batch of orders by id, preserving the order of `ids`.
    /// Used by label printing; fails on the first missing order.
    pub async fn get_orders(&self, ids: &[i64]) -> Result<Vec<Order>> {
        let mut orders = Vec::with_capacity(ids.len());
        for id in ids {
            let order = self
                .get_order(*id)
                .await
                .with_context(|| format!("Failed to fetch order {}", id))?;
            orders.push(order);
        }
        Ok(orders)
    }

    /// Approve an order for shipping. Action endpoint, not a resource verb.
    pub async fn approve_shipping(&self, order_id: i64) -> Result<Order> {
        self.post_action(&format!(
            "{}/orders/{}/approve-shipping",
            api_prefix(),
            order_id
        ))
        .await
    }

    pub async fn delete_order(&self, order_id: i64) -> Result<()> {
        self.delete(&format!("{}/orders/{}", api_prefix(), order_id))
            .await
    }
}
