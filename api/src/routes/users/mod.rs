//! # Users Routes Module
//!
//! Wires up the `/users` endpoint group.
//!
//! ## Structure
//! - `get.rs`: user listing (admin only) and the self-only admin check
//! - `post.rs`: registration
//! - `patch.rs`: admin promotion
//! - `delete.rs`: user removal

use crate::auth::guards::{require_admin, require_authenticated};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, patch},
};
use delete::delete_user;
use get::{get_admin_status, list_users};
use patch::promote_user;
use post::register_user;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/users` route group.
///
/// - `POST /users` → `register_user`
/// - `GET /users` → `list_users` (admin only)
/// - `DELETE /users/{id}` → `delete_user`
/// - `PATCH /users/admin/{id}` → `promote_user`
/// - `GET /users/admin/{id}` → `get_admin_status` (token required; `id` is the caller's email)
pub fn users_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_users)
                .route_layer(from_fn_with_state(app_state.clone(), require_admin))
                .route_layer(from_fn_with_state(app_state.clone(), require_authenticated))
                .post(register_user),
        )
        .route("/{id}", delete(delete_user))
        .route(
            "/admin/{id}",
            get(get_admin_status)
                .route_layer(from_fn_with_state(app_state.clone(), require_authenticated))
                .patch(promote_user),
        )
}
