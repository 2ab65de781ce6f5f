use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use storefront_core::{
    NewOrderItem, OrderStore, OrderStoreError, PageWindow, PreviousOrder, Product, ProductId,
    Quantity, UserId,
};
use uuid::Uuid;

use super::postgres_product_store::window_bounds;

const PRODUCT_FOREIGN_KEY: &str = "orders_product_id_fkey";
const USER_FOREIGN_KEY: &str = "orders_user_id_fkey";

#[derive(FromRow)]
struct HistoryRow {
    product_id: Uuid,
    name: String,
    price: i64,
    image: String,
    description: String,
    quantity: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<HistoryRow> for PreviousOrder {
    type Error = OrderStoreError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        let quantity = Quantity::try_from(i64::from(row.quantity))
            .map_err(|e| OrderStoreError::UnexpectedError(e.to_string()))?;

        Ok(PreviousOrder {
            product: Product {
                id: ProductId::from(row.product_id),
                name: row.name,
                price: row.price,
                image: row.image,
                description: row.description,
            },
            quantity,
            created_at: row.created_at,
        })
    }
}

fn map_insert_error(e: sqlx::Error, product_id: &ProductId) -> OrderStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return OrderStoreError::OrderAlreadyExists;
        }
        if db_err.is_foreign_key_violation() {
            match db_err.constraint() {
                Some(PRODUCT_FOREIGN_KEY) => {
                    return OrderStoreError::UnknownProduct(product_id.to_string());
                }
                Some(USER_FOREIGN_KEY) => return OrderStoreError::UnknownUser,
                _ => {}
            }
        }
    }
    OrderStoreError::UnexpectedError(e.to_string())
}

#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresOrderStore { pool }
    }
}

#[async_trait::async_trait]
impl OrderStore for PostgresOrderStore {
    /// Inserts the batch in one transaction. Rows share the transaction's
    /// `now()`, so the same product twice in one batch trips the uniqueness
    /// constraint and nothing is written.
    #[tracing::instrument(name = "Adding orders to PostgreSQL", skip_all, fields(item_count = items.len()))]
    async fn add_orders(&self, items: Vec<NewOrderItem>) -> Result<u64, OrderStoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| OrderStoreError::UnexpectedError(e.to_string()))?;

        let mut count = 0;
        for item in &items {
            let result = sqlx::query(
                r#"
                    INSERT INTO orders (user_id, product_id, quantity)
                    VALUES ($1, $2, $3)
                "#,
            )
            .bind(item.user_id.as_uuid())
            .bind(item.product_id.as_uuid())
            .bind(item.quantity.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_insert_error(e, &item.product_id))?;

            count += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| OrderStoreError::UnexpectedError(e.to_string()))?;

        Ok(count)
    }

    #[tracing::instrument(name = "Retrieving order history from PostgreSQL", skip_all)]
    async fn order_history(
        &self,
        user_id: &UserId,
        window: PageWindow,
    ) -> Result<Vec<PreviousOrder>, OrderStoreError> {
        let (offset, limit) = window_bounds(window);

        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
                SELECT p.id AS product_id, p.name, p.price, p.image, p.description,
                       o.quantity, o.created_at
                FROM orders o
                JOIN products p ON p.id = o.product_id
                WHERE o.user_id = $1
                ORDER BY o.created_at DESC, o.id DESC
                OFFSET $2
                LIMIT $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(PreviousOrder::try_from).collect()
    }
}
