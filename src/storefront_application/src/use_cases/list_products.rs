use std::time::Duration;

use storefront_core::{
    Page, PageRequest, Product, ProductQuery, ProductStore, ProductStoreError, paginate,
};

use crate::timeout::{TimeoutError, with_timeout};

#[derive(Debug, thiserror::Error)]
pub enum ListProductsError {
    #[error("Product store error: {0}")]
    ProductStoreError(#[from] ProductStoreError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

/// Lists the catalog one page at a time, most expensive first.
pub struct ListProductsUseCase<'a, P>
where
    P: ProductStore + ?Sized,
{
    product_store: &'a P,
    timeout: Duration,
}

impl<'a, P> ListProductsUseCase<'a, P>
where
    P: ProductStore + ?Sized,
{
    pub fn new(product_store: &'a P, timeout: Duration) -> Self {
        Self {
            product_store,
            timeout,
        }
    }

    /// Fetches one row past the page so `paginate` can tell whether a next page exists.
    #[tracing::instrument(name = "ListProductsUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        name_prefix: Option<String>,
        request: PageRequest,
    ) -> Result<Page<Product>, ListProductsError> {
        let query = ProductQuery::new(name_prefix, request.window());
        let rows = with_timeout(self.timeout, self.product_store.list_products(&query)).await??;
        Ok(paginate(request, rows))
    }
}
