//! Per-client rate limiting for the credential endpoints.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

use crate::config::RateLimitSetting;

/// Keys requests by client IP. The peer address of the connection is used
/// unless the service sits behind a proxy that sets `X-Forwarded-For`
/// (first hop) or `X-Real-IP`, in which case those headers are read first.
#[derive(Clone, Copy)]
pub struct ClientIpKeyExtractor {
    pub trust_proxy_headers: bool,
}

impl ClientIpKeyExtractor {
    fn forwarded_ip<T>(req: &Request<T>) -> Option<IpAddr> {
        let headers = req.headers();

        headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
            .or_else(|| {
                headers
                    .get("x-real-ip")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<IpAddr>().ok())
            })
    }
}

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let forwarded = if self.trust_proxy_headers {
            Self::forwarded_ip(req)
        } else {
            None
        };

        if let Some(ip) = forwarded {
            return Ok(ip);
        }

        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Limiter for signup and login. `None` when disabled or when the setting
/// has a zero period or burst.
pub fn auth_rate_limiter(setting: &RateLimitSetting) -> Option<RateLimiterLayer> {
    if !setting.enabled {
        return None;
    }

    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor {
            trust_proxy_headers: setting.trust_proxy_headers,
        })
        .per_second(setting.replenish_seconds)
        .burst_size(setting.burst)
        .finish();

    match config {
        Some(config) => Some(GovernorLayer::new(Arc::new(config))),
        None => {
            tracing::warn!(
                replenish_seconds = setting.replenish_seconds,
                burst = setting.burst,
                "invalid rate limit setting, rate limiting disabled"
            );
            None
        }
    }
}
