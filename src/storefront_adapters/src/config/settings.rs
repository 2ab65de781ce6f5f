use std::collections::HashMap;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, Source};
use secrecy::Secret;
use serde::Deserialize;
use storefront_core::{Product, ProductId};

use super::constants::{SETTINGS_FILE, defaults, env, prod};
use crate::session::{SameSitePolicy, SessionConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontSetting {
    pub http: HttpSetting,
    pub session: SessionSetting,
    pub persistence: PersistenceSetting,
    pub postgres: PostgresSetting,
    pub rate_limit: RateLimitSetting,
    /// Products loaded into the in-memory store. Ignored with Postgres.
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSetting {
    pub address: String,
    /// Where unauthenticated requests to protected routes are redirected.
    pub login_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSetting {
    pub cookie_name: String,
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
    pub secure: bool,
    pub same_site: SameSitePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceSetting {
    pub timeout_in_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    /// Absent means the in-memory stores are used.
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSetting {
    pub enabled: bool,
    pub replenish_seconds: u64,
    pub burst: u32,
    /// Key clients on `X-Forwarded-For`/`X-Real-IP`. Only safe behind a proxy
    /// that overwrites those headers.
    pub trust_proxy_headers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Minor currency units.
    pub price: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl StorefrontSetting {
    /// Loads defaults, then `config/storefront.*` if present, then `STOREFRONT__*`
    /// variables. `JWT_SECRET` (or `SECRET`) and `DATABASE_URL` win over everything.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env(std::env::vars().collect())
    }

    pub fn from_env(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_sources(File::with_name(SETTINGS_FILE).required(false), vars)
    }

    /// Same layering as [`Self::from_env`] with `file` in place of the settings file.
    pub fn from_sources<S>(file: S, vars: HashMap<String, String>) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let jwt_secret = vars
            .get(env::JWT_SECRET_ENV_VAR)
            .or_else(|| vars.get(env::LEGACY_SECRET_ENV_VAR))
            .cloned();
        let database_url = vars.get(env::DATABASE_URL_ENV_VAR).cloned();

        let settings = Config::builder()
            .set_default("http.address", prod::APP_ADDRESS)?
            .set_default("http.login_path", defaults::LOGIN_PATH)?
            .set_default("session.cookie_name", defaults::SESSION_COOKIE_NAME)?
            .set_default("session.token_ttl_in_seconds", defaults::TOKEN_TTL_IN_SECONDS)?
            .set_default("session.secure", true)?
            .set_default("session.same_site", "lax")?
            .set_default(
                "persistence.timeout_in_millis",
                defaults::PERSISTENCE_TIMEOUT_IN_MILLIS as i64,
            )?
            .set_default("postgres.max_connections", 5_i64)?
            .set_default("rate_limit.enabled", true)?
            .set_default(
                "rate_limit.replenish_seconds",
                defaults::RATE_LIMIT_REPLENISH_SECONDS as i64,
            )?
            .set_default("rate_limit.burst", i64::from(defaults::RATE_LIMIT_BURST))?
            .set_default("rate_limit.trust_proxy_headers", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(env::SETTINGS_PREFIX)
                    .prefix_separator(env::SETTINGS_SEPARATOR)
                    .separator(env::SETTINGS_SEPARATOR)
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("session.jwt_secret", jwt_secret)?
            .set_override_option("postgres.url", database_url)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn persistence_timeout(&self) -> Duration {
        Duration::from_millis(self.persistence.timeout_in_millis)
    }

    /// The configured catalog with fresh ids.
    pub fn catalog_products(&self) -> Vec<Product> {
        self.catalog
            .iter()
            .map(|entry| Product {
                id: ProductId::new(),
                name: entry.name.clone(),
                price: entry.price,
                image: entry.image.clone(),
                description: entry.description.clone(),
            })
            .collect()
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            cookie_name: self.session.cookie_name.clone(),
            jwt_secret: self.session.jwt_secret.clone(),
            token_ttl_in_seconds: self.session.token_ttl_in_seconds,
            secure: self.session.secure,
            same_site: self.session.same_site,
            login_path: self.http.login_path.clone(),
        }
    }
}
