use crate::routes::common::{bad_request, db_error, format_validation_errors};
use crate::routes::menu::common::CreateMenuItemRequest;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::menu_item::Model as MenuItemModel;
use util::state::AppState;
use validator::Validate;

/// POST /singleMenu
///
/// Adds a menu item. Admin only.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Tomato Soup",
///   "recipe": "Tomatoes, basil",
///   "image": "https://example.com/soup.png",
///   "category": "soup",
///   "price": 6.5
/// }
/// ```
///
/// An optional `_id` string is stored verbatim as the item's key.
///
/// ### Response: 200 OK
/// ```json
/// { "acknowledged": true, "insertedId": "65a1f0c2b3d4e5f60718293a" }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: validation failure
/// - `401/403`: missing token or not an admin
pub async fn create_menu_item(
    State(app_state): State<AppState>,
    Json(req): Json<CreateMenuItemRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return bad_request(format_validation_errors(&validation_errors));
    }

    match MenuItemModel::create(app_state.db(), req.into()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => db_error(e),
    }
}
