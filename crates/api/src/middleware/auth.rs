//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;
use creatorhub_db::models::user::User;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The user named by a valid Bearer token in the `Authorization` header.
///
/// The user row is loaded from the store on every request, so a token for a
/// user that no longer exists is rejected with 401.
///
/// ```ignore
/// async fn me(user: AuthUser) -> AppResult<Json<UserResponse>> {
///     Ok(Json(user.user.into()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn id(&self) -> DbId {
        self.user.id
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

        let user_id = validate_token(token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Bearer token refused");
            unauthorized("Invalid or expired token")
        })?;

        let user = state.store.get_user(user_id).await?.ok_or_else(|| {
            tracing::debug!(user_id, "Token names a user that does not exist");
            unauthorized("User not found")
        })?;

        Ok(AuthUser { user })
    }
}
