use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum CredentialCodecError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Hashes passwords for storage and checks login attempts against stored hashes.
#[async_trait]
pub trait CredentialCodec: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialCodecError>;

    /// `Ok(false)` for a wrong password or a malformed stored hash.
    async fn verify(
        &self,
        candidate: &Secret<String>,
        stored: &PasswordHash,
    ) -> Result<bool, CredentialCodecError>;
}
