pub mod assets;
pub mod auth;
pub mod categories;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/signup                    create account + token (public)
/// /auth/login                     token (public)
/// /auth/me                        current user (requires auth)
///
/// /users                          create (public)
/// /users/{id}                     get
/// /creators                       list (?limit=)
///
/// /categories                     list, create (create requires auth)
/// /categories/{id}                get
///
/// /assets                         list (?limit=&category_id=&creator_id=&featured=),
///                                 publish (creator only)
/// /assets/featured                featured showcase (?limit=, default 4)
/// /assets/recent                  newest first (?limit=, default 4)
/// /assets/trending                most downloaded (?limit=, default 4)
/// /assets/search                  search (?q=)
/// /assets/{id}                    get with details
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(users::router())
        .nest("/categories", categories::router())
        .nest("/assets", assets::router())
}
