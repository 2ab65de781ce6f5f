use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    product::{Product, ProductId},
    user::UserId,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Order must contain at least one item")]
    Empty,
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),
    #[error("Quantity must be a positive whole number")]
    InvalidQuantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = OrderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .ok()
            .filter(|quantity| *quantity > 0)
            .map(Self)
            .ok_or(OrderError::InvalidQuantity)
    }
}

/// One validated line of a submitted order, before it is tied to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

impl OrderLine {
    pub fn parse(product_id: &str, quantity: i64) -> Result<Self, OrderError> {
        let product_id = ProductId::parse(product_id)
            .ok_or_else(|| OrderError::InvalidProductId(product_id.to_owned()))?;
        let quantity = Quantity::try_from(quantity)?;
        Ok(Self {
            product_id,
            quantity,
        })
    }

    pub fn for_user(self, user_id: UserId) -> NewOrderItem {
        NewOrderItem {
            user_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

/// An order row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// A row of a user's order history joined with its product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousOrder {
    pub product: Product,
    pub quantity: Quantity,
    pub created_at: DateTime<Utc>,
}
