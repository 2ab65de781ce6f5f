use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use storefront_core::{
    NewOrderItem, OrderStore, OrderStoreError, PageWindow, PreviousOrder, ProductId,
    ProductStore, UserId,
};
use tokio::sync::RwLock;

use super::hashmap_product_store::HashMapProductStore;

#[derive(Debug, Clone)]
struct StoredOrder {
    item: NewOrderItem,
    created_at: DateTime<Utc>,
}

/// Orders kept in memory; history is joined against the given catalog.
#[derive(Default, Clone)]
pub struct HashMapOrderStore {
    orders: Arc<RwLock<Vec<StoredOrder>>>,
    catalog: HashMapProductStore,
}

impl HashMapOrderStore {
    pub fn new(catalog: HashMapProductStore) -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            catalog,
        }
    }
}

#[async_trait::async_trait]
impl OrderStore for HashMapOrderStore {
    async fn add_orders(&self, items: Vec<NewOrderItem>) -> Result<u64, OrderStoreError> {
        let created_at = Utc::now();
        let mut orders = self.orders.write().await;

        // The whole batch is checked before anything is written.
        let mut seen: HashSet<(UserId, ProductId, DateTime<Utc>)> = orders
            .iter()
            .map(|order| (order.item.user_id, order.item.product_id, order.created_at))
            .collect();
        for item in &items {
            let known = self
                .catalog
                .get_product(&item.product_id)
                .await
                .map_err(|e| OrderStoreError::UnexpectedError(e.to_string()))?
                .is_some();
            if !known {
                return Err(OrderStoreError::UnknownProduct(item.product_id.to_string()));
            }
            if !seen.insert((item.user_id, item.product_id, created_at)) {
                return Err(OrderStoreError::OrderAlreadyExists);
            }
        }

        let count = items.len() as u64;
        orders.extend(
            items
                .into_iter()
                .map(|item| StoredOrder { item, created_at }),
        );
        Ok(count)
    }

    async fn order_history(
        &self,
        user_id: &UserId,
        window: PageWindow,
    ) -> Result<Vec<PreviousOrder>, OrderStoreError> {
        let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);

        let mut mine: Vec<StoredOrder> = self
            .orders
            .read()
            .await
            .iter()
            .rev()
            .filter(|order| &order.item.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort keeps later inserts first among equal timestamps.
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut history = Vec::new();
        for order in mine.into_iter().skip(offset).take(limit) {
            let product = self
                .catalog
                .get_product(&order.item.product_id)
                .await
                .map_err(|e| OrderStoreError::UnexpectedError(e.to_string()))?
                .ok_or_else(|| OrderStoreError::UnknownProduct(order.item.product_id.to_string()))?;
            history.push(PreviousOrder {
                product,
                quantity: order.item.quantity,
                created_at: order.created_at,
            });
        }
        Ok(history)
    }
}
