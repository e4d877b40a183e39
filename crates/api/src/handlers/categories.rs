//! Handlers for `/categories`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;
use creatorhub_db::models::category::CreateCategory;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.store.list_categories().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(Json(DataResponse { data: category }))
}

/// POST /api/v1/categories
///
/// Requires authentication. New categories start with `asset_count = 0`.
pub async fn create_category(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.store.create_category(&input).await?;

    tracing::info!(category_id = category.id, user_id = auth.id(), "Category created via API");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}
