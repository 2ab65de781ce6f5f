use axum::{Json, extract::State, extract::rejection::JsonRejection};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use storefront_application::SignupUseCase;
use storefront_core::{Email, Password, PersonName, User};

use crate::http::AppState;
use crate::session::generate_session_cookie;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Secret<String>,
    pub first_name: String,
    pub last_name: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let Json(request) = request?;

    // Checked in field order; the first failure is the one reported.
    let email = Email::try_from(request.email)?;
    let first_name = PersonName::parse(&request.first_name, "firstName")?;
    let last_name = PersonName::parse(&request.last_name, "lastName")?;
    let password = Password::try_from(request.password)?;

    let use_case = SignupUseCase::new(
        state.user_store.as_ref(),
        state.credential_codec.as_ref(),
        state.timeout,
    );
    let user = use_case
        .execute(email, first_name, last_name, password)
        .await?;

    let auth_cookie = generate_session_cookie(&user, &state.session)?;
    let jar = jar.add(auth_cookie);

    Ok((jar, Json(user)))
}
