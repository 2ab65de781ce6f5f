use std::time::Duration;

use storefront_core::{
    CredentialCodec, CredentialCodecError, Email, NewUser, Password, PersonName, User, UserStore,
    UserStoreError,
};

use crate::timeout::{TimeoutError, with_timeout};

/// Error types specific to signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Credential codec error: {0}")]
    CredentialCodecError(#[from] CredentialCodecError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

/// Signup use case - handles user registration
pub struct SignupUseCase<'a, U, C>
where
    U: UserStore + ?Sized,
    C: CredentialCodec + ?Sized,
{
    user_store: &'a U,
    credential_codec: &'a C,
    timeout: Duration,
}

impl<'a, U, C> SignupUseCase<'a, U, C>
where
    U: UserStore + ?Sized,
    C: CredentialCodec + ?Sized,
{
    pub fn new(user_store: &'a U, credential_codec: &'a C, timeout: Duration) -> Self {
        Self {
            user_store,
            credential_codec,
            timeout,
        }
    }

    /// Hashes the password and stores the user.
    ///
    /// # Returns
    /// The stored user without its hash, or `UserAlreadyExists` when the email is taken
    #[tracing::instrument(
        name = "SignupUseCase::execute",
        skip(self, first_name, last_name, password)
    )]
    pub async fn execute(
        &self,
        email: Email,
        first_name: PersonName,
        last_name: PersonName,
        password: Password,
    ) -> Result<User, SignupError> {
        let password_hash = self.credential_codec.hash(&password).await?;

        let new_user = NewUser {
            email,
            first_name,
            last_name,
            password_hash,
        };

        let user = with_timeout(self.timeout, self.user_store.add_user(new_user)).await??;

        tracing::info!(user_id = %user.id, "user signed up");
        Ok(user)
    }
}
