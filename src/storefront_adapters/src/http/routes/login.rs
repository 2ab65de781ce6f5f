use axum::{Json, extract::State, extract::rejection::JsonRejection};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use storefront_application::LoginUseCase;
use storefront_core::{Email, User};

use crate::http::AppState;
use crate::session::generate_session_cookie;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let Json(request) = request?;
    let email = Email::try_from(request.email)?;

    let use_case = LoginUseCase::new(
        state.user_store.as_ref(),
        state.credential_codec.as_ref(),
        state.timeout,
    );
    let user = use_case.execute(email, request.password).await?;

    let auth_cookie = generate_session_cookie(&user, &state.session)?;
    let jar = jar.add(auth_cookie);

    Ok((jar, Json(user)))
}
