//! Handlers for the asset catalog.
//!
//! Reads go through [`creatorhub_db::Catalog`] and return assets with
//! creator and category details attached. Publishing requires a creator.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;
use creatorhub_db::models::asset::CreateAsset;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireCreator;
use crate::query::{AssetListParams, LimitParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /api/v1/assets
///
/// Filter by category, creator and featured flag, in publication order.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<AssetListParams>,
) -> AppResult<impl IntoResponse> {
    let assets = state
        .catalog
        .list_assets(&params.filter(), params.limit)
        .await?;

    tracing::debug!(count = assets.len(), "Listed assets");

    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/featured
pub async fn featured_assets(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let assets = state.catalog.featured(params.limit).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/recent
pub async fn recent_assets(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let assets = state.catalog.recent(params.limit).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/trending
pub async fn trending_assets(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let assets = state.catalog.trending(params.limit).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/search?q=
///
/// A missing or blank `q` is a 400.
pub async fn search_assets(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let assets = state.catalog.search(&params.q).await?;

    tracing::debug!(query = %params.q, count = assets.len(), "Asset search");

    Ok(Json(DataResponse { data: assets }))
}

// ---------------------------------------------------------------------------
// Single asset
// ---------------------------------------------------------------------------

/// GET /api/v1/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = state
        .catalog
        .get_asset_details(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    Ok(Json(DataResponse { data: asset }))
}

/// POST /api/v1/assets
///
/// Publish an asset as the authenticated creator. The creator id always comes
/// from the token, never from the body.
pub async fn create_asset(
    RequireCreator(creator): RequireCreator,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let asset = state.store.create_asset(creator.id(), &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}
