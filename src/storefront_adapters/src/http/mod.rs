pub mod extract;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use extract::AuthenticatedSession;
pub use rate_limit::{ClientIpKeyExtractor, RateLimiterLayer, auth_rate_limiter};
pub use state::AppState;
