use std::time::Duration;

use storefront_core::{OrderError, OrderLine, OrderStore, OrderStoreError, UserId};

use crate::timeout::{TimeoutError, with_timeout};

#[derive(Debug, thiserror::Error)]
pub enum CreateOrdersError {
    #[error(transparent)]
    InvalidOrder(#[from] OrderError),
    #[error("Order store error: {0}")]
    OrderStoreError(#[from] OrderStoreError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

/// Records a batch of order lines for the authenticated user.
pub struct CreateOrdersUseCase<'a, O>
where
    O: OrderStore + ?Sized,
{
    order_store: &'a O,
    timeout: Duration,
}

impl<'a, O> CreateOrdersUseCase<'a, O>
where
    O: OrderStore + ?Sized,
{
    pub fn new(order_store: &'a O, timeout: Duration) -> Self {
        Self {
            order_store,
            timeout,
        }
    }

    /// Every line is attributed to `user_id`; the caller cannot order on behalf
    /// of someone else.
    ///
    /// # Returns
    /// The number of rows created
    #[tracing::instrument(name = "CreateOrdersUseCase::execute", skip(self, lines), fields(line_count = lines.len()))]
    pub async fn execute(
        &self,
        user_id: UserId,
        lines: Vec<OrderLine>,
    ) -> Result<u64, CreateOrdersError> {
        if lines.is_empty() {
            return Err(OrderError::Empty.into());
        }

        let items = lines
            .into_iter()
            .map(|line| line.for_user(user_id))
            .collect();

        let count = with_timeout(self.timeout, self.order_store.add_orders(items)).await??;

        tracing::info!(count, "orders created");
        Ok(count)
    }
}
