//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose user does not
//! meet the requirement.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use creatorhub_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a user with `is_creator = true`. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn publish(RequireCreator(user): RequireCreator) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireCreator(pub AuthUser);

impl FromRequestParts<AppState> for RequireCreator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.user.is_creator {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only creators can publish assets".into(),
            )));
        }
        Ok(RequireCreator(user))
    }
}

/// Requires any authenticated user.
///
/// Same as [`AuthUser`], named for routes where the handler does not need
/// the user itself.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
