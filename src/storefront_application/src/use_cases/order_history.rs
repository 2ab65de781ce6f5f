use std::time::Duration;

use storefront_core::{
    OrderStore, OrderStoreError, Page, PageRequest, PreviousOrder, UserId, paginate,
};

use crate::timeout::{TimeoutError, with_timeout};

#[derive(Debug, thiserror::Error)]
pub enum OrderHistoryError {
    #[error("Order store error: {0}")]
    OrderStoreError(#[from] OrderStoreError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

/// Pages through a user's own orders, newest first.
pub struct OrderHistoryUseCase<'a, O>
where
    O: OrderStore + ?Sized,
{
    order_store: &'a O,
    timeout: Duration,
}

impl<'a, O> OrderHistoryUseCase<'a, O>
where
    O: OrderStore + ?Sized,
{
    pub fn new(order_store: &'a O, timeout: Duration) -> Self {
        Self {
            order_store,
            timeout,
        }
    }

    #[tracing::instrument(name = "OrderHistoryUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: UserId,
        request: PageRequest,
    ) -> Result<Page<PreviousOrder>, OrderHistoryError> {
        let rows = with_timeout(
            self.timeout,
            self.order_store.order_history(&user_id, request.window()),
        )
        .await??;
        Ok(paginate(request, rows))
    }
}
