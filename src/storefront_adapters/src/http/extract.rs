use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::http::routes::ApiError;
use crate::session::{SessionClaims, SessionConfig, extract_token, validate_session_token};

/// Identity of the caller, read from the session cookie.
///
/// Handlers that take this argument only run for requests carrying a valid,
/// unexpired token; everything else is redirected to the login page.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession(pub SessionClaims);

impl<S> FromRequestParts<S> for AuthenticatedSession
where
    SessionConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = SessionConfig::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        let claims = extract_token(&jar, &config.cookie_name)
            .and_then(|token| validate_session_token(token, &config))
            .map_err(|e| {
                tracing::debug!(error = %e, "rejecting unauthenticated request");
                ApiError::Unauthenticated {
                    login_path: config.login_path.clone(),
                }
            })?;

        Ok(Self(claims))
    }
}
