use crate::routes::common::{db_error, parse_object_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::Model as UserModel;
use util::state::AppState;

/// DELETE /users/{id}
///
/// Deletes the user with the given typed identifier. An unknown identifier
/// yields `deletedCount: 0`.
///
/// ### Errors
/// - `400 Bad Request`: `id` is not a typed identifier
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let oid = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(res) => return res,
    };

    match UserModel::delete_by_object_id(app_state.db(), &oid).await {
        Ok(result) => {
            if result.matched() {
                tracing::info!(id = %oid, "user deleted");
            }
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => db_error(e),
    }
}
