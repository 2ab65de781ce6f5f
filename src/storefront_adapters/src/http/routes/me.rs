use axum::{Json, extract::State};
use storefront_application::{CurrentUserError, CurrentUserUseCase};
use storefront_core::{User, UserStoreError};

use crate::http::{AppState, AuthenticatedSession};

use super::error::ApiError;

#[tracing::instrument(name = "Me", skip_all)]
pub async fn me(
    State(state): State<AppState>,
    AuthenticatedSession(session): AuthenticatedSession,
) -> Result<Json<User>, ApiError> {
    let use_case = CurrentUserUseCase::new(state.user_store.as_ref(), state.timeout);

    match use_case.execute(&session.user_id()).await {
        Ok(user) => Ok(Json(user)),
        // A valid token for a user that no longer exists.
        Err(CurrentUserError::UserStoreError(UserStoreError::UserNotFound)) => {
            Err(ApiError::Unauthenticated {
                login_path: state.session.login_path.clone(),
            })
        }
        Err(e) => Err(e.into()),
    }
}
