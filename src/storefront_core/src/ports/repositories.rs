use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    order::{NewOrderItem, PreviousOrder},
    product::{Product, ProductId, ProductQuery},
    user::{NewUser, User, UserCredentials, UserId},
};
use crate::pagination::PageWindow;

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Email already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user. Fails with `UserAlreadyExists` when the email is taken.
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_credentials(&self, email: &Email) -> Result<UserCredentials, UserStoreError>;
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;
}

// ProductStore port trait and errors
#[derive(Debug, Error)]
pub enum ProductStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Products matching the query, most expensive first, limited to the query window.
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ProductStoreError>;
    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, ProductStoreError>;
}

// OrderStore port trait and errors
#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("Order already exists")]
    OrderAlreadyExists,
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("User not found")]
    UnknownUser,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for OrderStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::OrderAlreadyExists, Self::OrderAlreadyExists)
                | (Self::UnknownProduct(_), Self::UnknownProduct(_))
                | (Self::UnknownUser, Self::UnknownUser)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts every item or none of them. Returns the number of rows written.
    async fn add_orders(&self, items: Vec<NewOrderItem>) -> Result<u64, OrderStoreError>;

    /// The user's orders, newest first, limited to the window.
    async fn order_history(
        &self,
        user_id: &UserId,
        window: PageWindow,
    ) -> Result<Vec<PreviousOrder>, OrderStoreError>;
}
