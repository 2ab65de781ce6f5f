use std::time::Duration;

use storefront_core::{User, UserId, UserStore, UserStoreError};

use crate::timeout::{TimeoutError, with_timeout};

#[derive(Debug, thiserror::Error)]
pub enum CurrentUserError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

/// Resolves the user behind an authenticated session.
pub struct CurrentUserUseCase<'a, U>
where
    U: UserStore + ?Sized,
{
    user_store: &'a U,
    timeout: Duration,
}

impl<'a, U> CurrentUserUseCase<'a, U>
where
    U: UserStore + ?Sized,
{
    pub fn new(user_store: &'a U, timeout: Duration) -> Self {
        Self {
            user_store,
            timeout,
        }
    }

    #[tracing::instrument(name = "CurrentUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId) -> Result<User, CurrentUserError> {
        let user = with_timeout(self.timeout, self.user_store.get_user(user_id)).await??;
        Ok(user)
    }
}
