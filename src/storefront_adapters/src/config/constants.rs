pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    /// Older deployments only set `SECRET`.
    pub const LEGACY_SECRET_ENV_VAR: &str = "SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const SETTINGS_PREFIX: &str = "STOREFRONT";
    pub const SETTINGS_SEPARATOR: &str = "__";
}

pub const SETTINGS_FILE: &str = "config/storefront";

pub mod defaults {
    pub const SESSION_COOKIE_NAME: &str = "token";
    pub const TOKEN_TTL_IN_SECONDS: i64 = 24 * 60 * 60;
    pub const LOGIN_PATH: &str = "/login";
    pub const PERSISTENCE_TIMEOUT_IN_MILLIS: u64 = 10_000;
    pub const RATE_LIMIT_REPLENISH_SECONDS: u64 = 60;
    pub const RATE_LIMIT_BURST: u32 = 5;
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
