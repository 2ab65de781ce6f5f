pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    CatalogEntry, HttpSetting, PersistenceSetting, PostgresSetting, RateLimitSetting,
    SessionSetting, StorefrontSetting,
};
