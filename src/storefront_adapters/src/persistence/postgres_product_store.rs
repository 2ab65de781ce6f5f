use sqlx::{FromRow, PgPool};
use storefront_core::{
    PageWindow, Product, ProductId, ProductQuery, ProductStore, ProductStoreError,
};
use uuid::Uuid;

#[derive(FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: i64,
    image: String,
    description: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from(row.id),
            name: row.name,
            price: row.price,
            image: row.image,
            description: row.description,
        }
    }
}

/// Escapes LIKE wildcards so the prefix is matched literally.
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub(crate) fn window_bounds(window: PageWindow) -> (i64, i64) {
    (
        i64::try_from(window.offset).unwrap_or(i64::MAX),
        i64::try_from(window.limit).unwrap_or(i64::MAX),
    )
}

#[derive(Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresProductStore { pool }
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[tracing::instrument(name = "Listing products from PostgreSQL", skip_all)]
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ProductStoreError> {
        let pattern = query.name_prefix.as_deref().map(like_prefix);
        let (offset, limit) = window_bounds(query.window);

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
                SELECT id, name, price, image, description
                FROM products
                WHERE $1::text IS NULL OR name ILIKE $1 ESCAPE '\'
                ORDER BY price DESC, name, id
                OFFSET $2
                LIMIT $3
            "#,
        )
        .bind(pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductStoreError::UnexpectedError(e.to_string()))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[tracing::instrument(name = "Retrieving product from PostgreSQL", skip_all)]
    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, ProductStoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
                SELECT id, name, price, image, description
                FROM products
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductStoreError::UnexpectedError(e.to_string()))?;

        Ok(row.map(Product::from))
    }
}
