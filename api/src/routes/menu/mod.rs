//! # Menu Routes Module
//!
//! Catalogue browsing and maintenance.
//!
//! ## Structure
//! - `get.rs`: listing, single item, count and paging
//! - `post.rs`: item creation (admin only)
//! - `patch.rs`: partial updates
//! - `delete.rs`: removal, optionally admin only
//!
//! Single-item routes accept both identifier representations and go through
//! `db::resolve`.

use crate::auth::guards::{require_admin, require_authenticated};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};
use delete::delete_menu_item;
use get::{get_menu_item, list_menu, list_menu_page, menu_count};
use patch::update_menu_item;
use post::create_menu_item;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the menu route group.
///
/// - `GET /menu` → `list_menu`
/// - `POST /singleMenu` → `create_menu_item` (admin only)
/// - `GET /editMenuItem/{id}` → `get_menu_item`
/// - `PATCH /updateMenuItem/{id}` → `update_menu_item`
/// - `DELETE /deleteMenuItem/{id}` → `delete_menu_item` (admin only when configured)
/// - `GET /menuCount` → `menu_count`
/// - `GET /allMenus` → `list_menu_page`
pub fn menu_routes(app_state: AppState) -> Router<AppState> {
    let mut delete_route = delete(delete_menu_item);
    if app_state.menu_delete_requires_admin() {
        delete_route = delete_route
            .route_layer(from_fn_with_state(app_state.clone(), require_admin))
            .route_layer(from_fn_with_state(app_state.clone(), require_authenticated));
    }

    Router::new()
        .route("/menu", get(list_menu))
        .route(
            "/singleMenu",
            post(create_menu_item)
                .route_layer(from_fn_with_state(app_state.clone(), require_admin))
                .route_layer(from_fn_with_state(app_state.clone(), require_authenticated)),
        )
        .route("/editMenuItem/{id}", get(get_menu_item))
        .route("/updateMenuItem/{id}", patch(update_menu_item))
        .route("/deleteMenuItem/{id}", delete_route)
        .route("/menuCount", get(menu_count))
        .route("/allMenus", get(list_menu_page))
}
