//! # Cart Routes Module
//!
//! - `POST /carts`: add a line to a user's cart
//! - `GET /carts?email=`: a user's cart lines
//! - `DELETE /MyCart/{id}`: remove one cart line by typed identifier

use crate::routes::common::{bad_request, db_error, format_validation_errors, parse_object_id};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use self::common::{AddToCartRequest, CartQuery};
use db::models::cart::Model as CartModel;
use util::state::AppState;
use validator::Validate;

pub mod common;

pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/carts", get(list_cart).post(add_to_cart))
        .route("/MyCart/{id}", delete(remove_from_cart))
}

/// POST /carts
///
/// ### Request Body
/// ```json
/// {
///   "menuId": "65a1f0c2b3d4e5f60718293a",
///   "userEmail": "someone@example.com",
///   "name": "Tomato Soup",
///   "image": "https://example.com/soup.png",
///   "price": 6.5
/// }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: invalid `userEmail` or negative price
pub async fn add_to_cart(
    State(app_state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return bad_request(format_validation_errors(&validation_errors));
    }

    match CartModel::create(app_state.db(), req.into()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /carts?email=
///
/// Cart lines whose `userEmail` equals `email`. Without `email` the list is empty.
pub async fn list_cart(
    State(app_state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> impl IntoResponse {
    match CartModel::find_by_user_email(app_state.db(), query.email.as_deref()).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => db_error(e),
    }
}

/// DELETE /MyCart/{id}
///
/// ### Errors
/// - `400 Bad Request`: `id` is not a typed identifier
pub async fn remove_from_cart(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let oid = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(res) => return res,
    };

    match CartModel::delete_by_object_id(app_state.db(), &oid).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => db_error(e),
    }
}
