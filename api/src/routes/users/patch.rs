use crate::routes::common::{db_error, parse_object_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::Model as UserModel;
use util::state::AppState;

/// PATCH /users/admin/{id}
///
/// Grants the admin role to the user with the given typed identifier.
///
/// ### Response: 200 OK
/// ```json
/// { "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: `id` is not a typed identifier
pub async fn promote_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let oid = match parse_object_id(&id) {
        Ok(oid) => oid,
        Err(res) => return res,
    };

    match UserModel::promote_to_admin(app_state.db(), &oid).await {
        Ok(result) => {
            tracing::info!(id = %oid, matched = result.matched_count, "admin promotion");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => db_error(e),
    }
}
