use std::sync::Arc;
use tokio::sync::RwLock;

use storefront_core::{Product, ProductId, ProductQuery, ProductStore, ProductStoreError};

/// Catalog kept in memory, most expensive first.
#[derive(Default, Clone)]
pub struct HashMapProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl HashMapProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let mut products = products;
        sort_by_price(&mut products);
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn add_product(&self, product: Product) {
        let mut products = self.products.write().await;
        products.push(product);
        sort_by_price(&mut products);
    }
}

fn sort_by_price(products: &mut [Product]) {
    products.sort_by(|a, b| b.price.cmp(&a.price).then_with(|| a.name.cmp(&b.name)));
}

#[async_trait::async_trait]
impl ProductStore for HashMapProductStore {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ProductStoreError> {
        let offset = usize::try_from(query.window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.window.limit).unwrap_or(usize::MAX);

        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|product| query.matches(product))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, ProductStoreError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| &product.id == id).cloned())
    }
}
