use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::session::{SessionConfig, create_removal_cookie};

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Clears the session cookie. Succeeds whether or not a session existed.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(config): State<SessionConfig>,
    jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>) {
    let jar = jar.add(create_removal_cookie(&config));

    (
        jar,
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}
