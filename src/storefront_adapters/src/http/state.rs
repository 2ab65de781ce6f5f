use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use storefront_core::{CredentialCodec, OrderStore, ProductStore, UserStore};

use crate::session::SessionConfig;

/// Everything the route handlers share. Ports are trait objects so the same
/// router runs against the in-memory or the Postgres stores.
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub product_store: Arc<dyn ProductStore>,
    pub order_store: Arc<dyn OrderStore>,
    pub credential_codec: Arc<dyn CredentialCodec>,
    pub session: SessionConfig,
    pub timeout: Duration,
}

impl FromRef<AppState> for SessionConfig {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
