use std::time::Duration;

use secrecy::Secret;
use storefront_core::{
    CredentialCodec, CredentialCodecError, Email, PasswordHash, User, UserStore, UserStoreError,
};

use crate::timeout::{TimeoutError, with_timeout};

/// Well-formed hash that no password produces. Unknown emails are verified
/// against it so they cost the same as a wrong password.
const UNKNOWN_USER_HASH: &str = concat!(
    "5f0c2d6ad2a1e4b3c7f18e9d0a6b4c3e2f1d0c9b8a7f6e5d4c3b2a1f0e9d8c7b",
    "00112233445566778899aabbccddeeff"
);

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid log in credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Credential codec error: {0}")]
    CredentialCodecError(#[from] CredentialCodecError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

impl From<UserStoreError> for LoginError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserNotFound => LoginError::InvalidCredentials,
            other => LoginError::UserStoreError(other),
        }
    }
}

/// Login use case - handles user authentication
pub struct LoginUseCase<'a, U, C>
where
    U: UserStore + ?Sized,
    C: CredentialCodec + ?Sized,
{
    user_store: &'a U,
    credential_codec: &'a C,
    timeout: Duration,
}

impl<'a, U, C> LoginUseCase<'a, U, C>
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

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - The submitted password, checked against the stored hash
    ///
    /// # Returns
    /// The authenticated user. An unknown email and a wrong password both yield
    /// `InvalidCredentials`.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Secret<String>) -> Result<User, LoginError> {
        let credentials =
            match with_timeout(self.timeout, self.user_store.get_credentials(&email)).await? {
                Ok(credentials) => credentials,
                Err(UserStoreError::UserNotFound) => {
                    let decoy = PasswordHash::new(Secret::new(UNKNOWN_USER_HASH.to_owned()));
                    self.credential_codec.verify(&password, &decoy).await?;
                    tracing::debug!("unknown email");
                    return Err(LoginError::InvalidCredentials);
                }
                Err(e) => return Err(e.into()),
            };

        let matches = self
            .credential_codec
            .verify(&password, &credentials.password_hash)
            .await?;

        if !matches {
            tracing::debug!("password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        Ok(credentials.user)
    }
}
