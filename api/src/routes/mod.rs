//! HTTP route entry point.
//!
//! Routes are organized by domain, each protected via the appropriate guard:
//! - `/`, `/health` → liveness (public)
//! - `/jwt` → token issuance (public)
//! - `/menu`, `/singleMenu`, `/editMenuItem`, ... → menu catalogue
//! - `/testimonials` → reviews (public)
//! - `/carts`, `/MyCart` → carts (public)
//! - `/users` → registration, listing (admin) and admin status (token)

use crate::routes::{
    carts::cart_routes, health::health_routes, jwt::jwt_routes, menu::menu_routes,
    reviews::review_routes, users::users_routes,
};
use axum::Router;
use util::state::AppState;

pub mod carts;
pub mod common;
pub mod health;
pub mod jwt;
pub mod menu;
pub mod reviews;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// Guards that need the store or the verification key are built from
/// `app_state`, which is also installed as the router state.
pub fn routes(app_state: AppState) -> Router {
    if app_state.menu_delete_requires_admin() {
        tracing::info!("Menu deletion requires an admin token");
    }

    Router::new()
        .merge(health_routes())
        .merge(jwt_routes())
        .merge(menu_routes(app_state.clone()))
        .merge(review_routes())
        .merge(cart_routes())
        .nest("/users", users_routes(app_state.clone()))
        .with_state(app_state)
}
