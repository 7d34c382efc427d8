use crate::auth::AuthUser;
use crate::response::{ApiResponse, Empty};
use crate::routes::common::db_error;
use crate::routes::users::common::AdminStatusResponse;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::Model as UserModel;
use util::state::AppState;

/// GET /users
///
/// Lists all registered users. Admin only.
pub async fn list_users(State(app_state): State<AppState>) -> impl IntoResponse {
    match UserModel::find_all(app_state.db()).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /users/admin/{email}
///
/// Reports whether the caller is an admin. Callers may only ask about
/// themselves: the path email must equal the token's `email` claim.
///
/// ### Response: 200 OK
/// ```json
/// { "admin": false }
/// ```
///
/// An unknown email is reported as `admin: false`.
///
/// ### Errors
/// - `401/403`: missing or invalid token
/// - `403 Forbidden`: path email differs from the token's email
pub async fn get_admin_status(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    if claims.email() != Some(email.as_str()) {
        tracing::warn!(path_email = %email, "admin status requested for another user");
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error("Unauthorized access")),
        )
            .into_response();
    }

    match UserModel::find_by_email(app_state.db(), &email).await {
        Ok(user) => {
            let admin = user.is_some_and(|u| u.is_admin());
            (StatusCode::OK, Json(AdminStatusResponse { admin })).into_response()
        }
        Err(e) => db_error(e),
    }
}
