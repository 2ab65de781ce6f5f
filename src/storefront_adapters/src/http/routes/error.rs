use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use storefront_application::{
    CreateOrdersError, CurrentUserError, GetProductError, ListProductsError, LoginError,
    OrderHistoryError, SignupError, TimeoutError,
};
use storefront_core::{
    CredentialCodecError, OrderError, OrderStoreError, ProductStoreError, UserError,
    UserStoreError,
};
use thiserror::Error;

use crate::session::TokenAuthError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Request took too long")]
    Timeout,

    #[error("Invalid log in credentials")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthenticated { login_path: String },

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Unauthenticated { login_path } => {
                return Redirect::to(login_path).into_response();
            }
            ApiError::Internal(cause) => {
                tracing::error!(%cause, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(error: OrderError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<TimeoutError> for ApiError {
    fn from(_: TimeoutError) -> Self {
        ApiError::Timeout
    }
}

impl From<TokenAuthError> for ApiError {
    fn from(error: TokenAuthError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<CredentialCodecError> for ApiError {
    fn from(error: CredentialCodecError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::Conflict(error.to_string()),
            UserStoreError::UserNotFound | UserStoreError::UnexpectedError(_) => {
                ApiError::Internal(error.to_string())
            }
        }
    }
}

impl From<ProductStoreError> for ApiError {
    fn from(error: ProductStoreError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<OrderStoreError> for ApiError {
    fn from(error: OrderStoreError) -> Self {
        match error {
            OrderStoreError::OrderAlreadyExists => ApiError::Conflict(error.to_string()),
            OrderStoreError::UnknownProduct(_) => ApiError::Validation(error.to_string()),
            // Routes holding a session turn this into a login redirect.
            OrderStoreError::UnknownUser => ApiError::Internal(error.to_string()),
            OrderStoreError::UnexpectedError(_) => ApiError::Internal(error.to_string()),
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::UserStoreError(e) => e.into(),
            SignupError::CredentialCodecError(e) => e.into(),
            SignupError::Timeout(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::UserStoreError(e) => e.into(),
            LoginError::CredentialCodecError(e) => e.into(),
            LoginError::Timeout(e) => e.into(),
        }
    }
}

impl From<CurrentUserError> for ApiError {
    fn from(error: CurrentUserError) -> Self {
        match error {
            CurrentUserError::UserStoreError(e) => e.into(),
            CurrentUserError::Timeout(e) => e.into(),
        }
    }
}

impl From<ListProductsError> for ApiError {
    fn from(error: ListProductsError) -> Self {
        match error {
            ListProductsError::ProductStoreError(e) => e.into(),
            ListProductsError::Timeout(e) => e.into(),
        }
    }
}

impl From<GetProductError> for ApiError {
    fn from(error: GetProductError) -> Self {
        match error {
            GetProductError::ProductStoreError(e) => e.into(),
            GetProductError::Timeout(e) => e.into(),
        }
    }
}

impl From<CreateOrdersError> for ApiError {
    fn from(error: CreateOrdersError) -> Self {
        match error {
            CreateOrdersError::InvalidOrder(e) => e.into(),
            CreateOrdersError::OrderStoreError(e) => e.into(),
            CreateOrdersError::Timeout(e) => e.into(),
        }
    }
}

impl From<OrderHistoryError> for ApiError {
    fn from(error: OrderHistoryError) -> Self {
        match error {
            OrderHistoryError::OrderStoreError(e) => e.into(),
            OrderHistoryError::Timeout(e) => e.into(),
        }
    }
}
