//! Route definitions for the `/assets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// Static segments take priority over `/{id}`.
///
/// ```text
/// GET  /           -> list_assets
/// POST /           -> create_asset (creator only)
/// GET  /featured   -> featured_assets
/// GET  /recent     -> recent_assets
/// GET  /trending   -> trending_assets
/// GET  /search     -> search_assets
/// GET  /{id}       -> get_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/featured", get(assets::featured_assets))
        .route("/recent", get(assets::recent_assets))
        .route("/trending", get(assets::trending_assets))
        .route("/search", get(assets::search_assets))
        .route("/{id}", get(assets::get_asset))
}
