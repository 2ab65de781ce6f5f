use std::time::Duration;

use storefront_core::{Product, ProductId, ProductStore, ProductStoreError};

use crate::timeout::{TimeoutError, with_timeout};

#[derive(Debug, thiserror::Error)]
pub enum GetProductError {
    #[error("Product store error: {0}")]
    ProductStoreError(#[from] ProductStoreError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

pub struct GetProductUseCase<'a, P>
where
    P: ProductStore + ?Sized,
{
    product_store: &'a P,
    timeout: Duration,
}

impl<'a, P> GetProductUseCase<'a, P>
where
    P: ProductStore + ?Sized,
{
    pub fn new(product_store: &'a P, timeout: Duration) -> Self {
        Self {
            product_store,
            timeout,
        }
    }

    /// A missing product is `Ok(None)`, not an error.
    #[tracing::instrument(name = "GetProductUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &ProductId) -> Result<Option<Product>, GetProductError> {
        let product = with_timeout(self.timeout, self.product_store.get_product(id)).await??;
        Ok(product)
    }
}
