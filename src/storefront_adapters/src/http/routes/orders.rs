use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use storefront_application::{CreateOrdersError, CreateOrdersUseCase, OrderHistoryUseCase};
use storefront_core::{OrderLine, OrderStoreError, PaginationDetails, PreviousOrder};

use crate::http::{AppState, AuthenticatedSession};

use super::error::ApiError;
use super::products::PageQuery;

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrdersResponse {
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryResponse {
    pub previous_orders: Vec<PreviousOrder>,
    pub pagination_details: PaginationDetails,
}

#[tracing::instrument(name = "Create orders", skip_all)]
pub async fn create_orders(
    State(state): State<AppState>,
    AuthenticatedSession(session): AuthenticatedSession,
    request: Result<Json<Vec<OrderItemRequest>>, JsonRejection>,
) -> Result<Json<CreateOrdersResponse>, ApiError> {
    let Json(items) = request?;

    let lines = items
        .iter()
        .map(|item| OrderLine::parse(&item.product_id, item.quantity))
        .collect::<Result<Vec<_>, _>>()?;

    let use_case = CreateOrdersUseCase::new(state.order_store.as_ref(), state.timeout);

    match use_case.execute(session.user_id(), lines).await {
        Ok(count) => Ok(Json(CreateOrdersResponse { count })),
        // A valid token for a user that no longer exists.
        Err(CreateOrdersError::OrderStoreError(OrderStoreError::UnknownUser)) => {
            Err(ApiError::Unauthenticated {
                login_path: state.session.login_path.clone(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

#[tracing::instrument(name = "Order history", skip_all)]
pub async fn order_history(
    State(state): State<AppState>,
    AuthenticatedSession(session): AuthenticatedSession,
    Query(query): Query<PageQuery>,
) -> Result<Json<OrderHistoryResponse>, ApiError> {
    let use_case = OrderHistoryUseCase::new(state.order_store.as_ref(), state.timeout);
    let page = use_case
        .execute(session.user_id(), query.page_request())
        .await?;

    Ok(Json(OrderHistoryResponse {
        previous_orders: page.items,
        pagination_details: page.details,
    }))
}
