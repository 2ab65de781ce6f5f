//! scrypt password digests stored as `hex(key) + hex(salt)`.
//!
//! The key is 32 bytes (64 hex chars) and the salt 16 random bytes (32 hex
//! chars). The salt's hex text, not its raw bytes, is what scrypt receives, so
//! digests written by earlier deployments keep verifying.

use scrypt::Params;
use secrecy::{ExposeSecret, Secret};
use storefront_core::{CredentialCodec, CredentialCodecError, Password, PasswordHash};

const KEY_LEN: usize = 32;
const SALT_LEN: usize = 16;
const KEY_HEX_LEN: usize = KEY_LEN * 2;

// N = 2^14, r = 8, p = 1
const LOG_N: u8 = 14;
const R: u32 = 8;
const P: u32 = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScryptCredentialCodec;

impl ScryptCredentialCodec {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CredentialCodec for ScryptCredentialCodec {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialCodecError> {
        let password = password.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| -> Result<PasswordHash, CredentialCodecError> {
                let salt = hex::encode(rand::random::<[u8; SALT_LEN]>());
                let key = derive_key(password.expose_secret(), &salt)?;
                Ok(PasswordHash::new(Secret::from(format!("{key}{salt}"))))
            })
        })
        .await
        .map_err(|e| CredentialCodecError::HashingFailed(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Secret<String>,
        stored: &PasswordHash,
    ) -> Result<bool, CredentialCodecError> {
        let candidate = candidate.clone();
        let stored = stored.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| -> Result<bool, CredentialCodecError> {
                let stored = stored.expose_secret();
                let (Some(expected), Some(salt)) =
                    (stored.get(..KEY_HEX_LEN), stored.get(KEY_HEX_LEN..))
                else {
                    return Ok(false);
                };

                let actual = derive_key(candidate.expose_secret(), salt)?;
                Ok(constant_time_eq(expected.as_bytes(), actual.as_bytes()))
            })
        })
        .await
        .map_err(|e| CredentialCodecError::HashingFailed(e.to_string()))?;

        result
    }
}

fn derive_key(password: &str, salt: &str) -> Result<String, CredentialCodecError> {
    let params = Params::new(LOG_N, R, P, KEY_LEN)
        .map_err(|e| CredentialCodecError::HashingFailed(e.to_string()))?;
    let mut key = [0u8; KEY_LEN];
    scrypt::scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut key)
        .map_err(|e| CredentialCodecError::HashingFailed(e.to_string()))?;
    Ok(hex::encode(key))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
