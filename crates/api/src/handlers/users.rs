//! Handlers for `/users` and `/creators`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use creatorhub_core::catalog::validate_limit;
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;
use creatorhub_db::models::user::{CreateUser, User, UserResponse};
use serde::Deserialize;

use crate::auth::password::{check_new_password, hash_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users` and `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_creator: Option<bool>,
}

/// Hash the password and create the account.
pub(crate) async fn register(state: &AppState, input: RegisterRequest) -> AppResult<User> {
    check_new_password(&input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        password_hash,
        display_name: input.display_name,
        bio: input.bio,
        avatar_url: input.avatar_url,
        is_creator: input.is_creator,
    };
    Ok(state.store.create_user(&create).await?)
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// POST /api/v1/users
///
/// Create an account without signing in. Returns 201 with the public user.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let user = register(&state, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// GET /api/v1/creators
///
/// Creator accounts in sign-up order, optionally limited.
pub async fn list_creators(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = validate_limit(params.limit)?;
    let creators: Vec<UserResponse> = state
        .store
        .list_creators(limit)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    tracing::debug!(count = creators.len(), "Listed creators");

    Ok(Json(DataResponse { data: creators }))
}
