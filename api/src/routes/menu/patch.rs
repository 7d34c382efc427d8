use crate::routes::common::{bad_request, format_validation_errors, resolve_error};
use crate::routes::menu::common::UpdateMenuItemRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::menu_item::{MenuItemChanges, Model as MenuItemModel};
use sea_orm::DbErr;
use util::state::AppState;
use validator::Validate;

/// PATCH /updateMenuItem/{id}
///
/// Sets the provided fields among `name`, `recipe`, `image`, `category` and
/// `price` on the item stored under `id` (typed or raw).
///
/// ### Response: 200 OK
/// ```json
/// { "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: validation failure
/// - `404 Not Found`: no item under either representation
pub async fn update_menu_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMenuItemRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return bad_request(format_validation_errors(&validation_errors));
    }

    let conn = app_state.db();
    let changes: MenuItemChanges = req.into();
    let changes = &changes;

    let updated = db::resolve(&id, |key| async move {
        let result = MenuItemModel::update_by_key(conn, &key, changes).await?;
        Ok::<_, DbErr>(result.matched().then_some(result))
    })
    .await;

    match updated {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => resolve_error(e),
    }
}
