use std::sync::Arc;

use color_eyre::eyre::Result;
use sqlx::postgres::PgPoolOptions;
use storefront::{
    AppState, ExposeSecret, HashMapOrderStore, HashMapProductStore, HashMapUserStore,
    PostgresOrderStore, PostgresProductStore, PostgresUserStore, ScryptCredentialCodec,
    StorefrontService, adapters::config::StorefrontSetting, adapters::persistence::MIGRATOR,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = StorefrontSetting::load()?;
    let state = build_state(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.http.address).await?;
    tracing::info!("Starting storefront...");

    StorefrontService::new(state, &config.rate_limit)
        .run_standalone(listener, shutdown_signal())
        .await?;

    Ok(())
}

/// Postgres when `DATABASE_URL` (or `postgres.url`) is set, in-memory stores otherwise.
async fn build_state(config: &StorefrontSetting) -> Result<AppState> {
    let credential_codec = Arc::new(ScryptCredentialCodec::new());
    let session = config.session_config();
    let timeout = config.persistence_timeout();

    let state = match &config.postgres.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.postgres.max_connections)
                .acquire_timeout(timeout)
                .connect(url.expose_secret())
                .await?;

            MIGRATOR.run(&pg_pool).await?;

            AppState {
                user_store: Arc::new(PostgresUserStore::new(pg_pool.clone())),
                product_store: Arc::new(PostgresProductStore::new(pg_pool.clone())),
                order_store: Arc::new(PostgresOrderStore::new(pg_pool)),
                credential_codec,
                session,
                timeout,
            }
        }
        None => {
            let catalog = config.catalog_products();
            if catalog.is_empty() {
                tracing::warn!(
                    "No database configured, using in-memory stores with an empty catalog; \
                     add a `catalog` list to config/storefront to seed products"
                );
            } else {
                tracing::warn!(
                    products = catalog.len(),
                    "No database configured, using in-memory stores"
                );
            }
            let product_store = HashMapProductStore::with_products(catalog);

            AppState {
                user_store: Arc::new(HashMapUserStore::new()),
                product_store: Arc::new(product_store.clone()),
                order_store: Arc::new(HashMapOrderStore::new(product_store)),
                credential_codec,
                session,
                timeout,
            }
        }
    };

    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
