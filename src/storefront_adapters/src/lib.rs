pub mod config;
pub mod credentials;
pub mod http;
pub mod persistence;
pub mod session;

pub use credentials::ScryptCredentialCodec;
pub use persistence::{
    HashMapOrderStore, HashMapProductStore, HashMapUserStore, PostgresOrderStore,
    PostgresProductStore, PostgresUserStore,
};
pub use session::{SessionClaims, SessionConfig, TokenAuthError};
