use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use storefront_application::{GetProductUseCase, ListProductsUseCase};
use storefront_core::{PageRequest, PaginationDetails, Product, ProductId};

use crate::http::AppState;

use super::error::ApiError;

/// `skip` is kept as raw text; anything that is not a non-negative integer means page 0.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub skip: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.skip.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub skip: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub catalog: Vec<Product>,
    pub pagination_details: PaginationDetails,
}

#[tracing::instrument(name = "List products", skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<CatalogResponse>, ApiError> {
    let request = PageRequest::from_query(query.skip.as_deref());

    let use_case = ListProductsUseCase::new(state.product_store.as_ref(), state.timeout);
    let page = use_case.execute(query.name, request).await?;

    Ok(Json(CatalogResponse {
        catalog: page.items,
        pagination_details: page.details,
    }))
}

/// An id that is not a UUID cannot match a product, so it answers `null` like any miss.
#[tracing::instrument(name = "Get product", skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Option<Product>>, ApiError> {
    let Some(id) = ProductId::parse(&product_id) else {
        return Ok(Json(None));
    };

    let use_case = GetProductUseCase::new(state.product_store.as_ref(), state.timeout);
    let product = use_case.execute(&id).await?;

    Ok(Json(product))
}
