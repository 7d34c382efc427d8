use crate::routes::common::resolve_error;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::menu_item::Model as MenuItemModel;
use sea_orm::DbErr;
use util::state::AppState;

/// DELETE /deleteMenuItem/{id}
///
/// Removes the item stored under `id` (typed or raw). Admin only when the
/// server runs with `MENU_DELETE_REQUIRES_ADMIN=true`.
///
/// ### Response: 200 OK
/// ```json
/// { "acknowledged": true, "deletedCount": 1 }
/// ```
///
/// ### Errors
/// - `404 Not Found`: no item under either representation
pub async fn delete_menu_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let conn = app_state.db();
    let deleted = db::resolve(&id, |key| async move {
        let result = MenuItemModel::delete_by_key(conn, &key).await?;
        Ok::<_, DbErr>(result.matched().then_some(result))
    })
    .await;

    match deleted {
        Ok(result) => {
            tracing::info!(id = %id, "menu item deleted");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => resolve_error(e),
    }
}
