pub mod storefront_service;
pub mod telemetry;

pub use storefront_service::StorefrontService;
