//! Route definitions for users and creators.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes merged at the API root.
///
/// ```text
/// POST /users       -> create_user
/// GET  /users/{id}  -> get_user
/// GET  /creators    -> list_creators
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route("/creators", get(users::list_creators))
}
