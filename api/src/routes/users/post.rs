//! # User Registration
//!
//! - `POST /users`: Register a user unless the email is already taken

use crate::routes::common::{bad_request, db_error, format_validation_errors};
use crate::routes::users::common::{MessageResponse, RegisterUserRequest};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::Model as UserModel;
use util::state::AppState;
use validator::Validate;

/// POST /users
///
/// Registers a user with the standard role.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@example.com",
///   "photoUrl": "https://example.com/ann.png"
/// }
/// ```
///
/// ### Response: 200 OK
/// ```json
/// { "acknowledged": true, "insertedId": "65a1f0c2b3d4e5f60718293a" }
/// ```
///
/// An email that is already registered is answered with `200 OK` and
/// `{ "message": "user already exists" }`; nothing is inserted.
///
/// ### Errors
/// - `400 Bad Request`: invalid email
pub async fn register_user(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return bad_request(format_validation_errors(&validation_errors));
    }

    let db = app_state.db();

    match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            tracing::info!(email = %req.email, "registration skipped, user already exists");
            let body = MessageResponse {
                message: "user already exists".into(),
            };
            return (StatusCode::OK, Json(body)).into_response();
        }
        Ok(None) => {}
        Err(e) => return db_error(e),
    }

    match UserModel::create(db, req.name.as_deref(), &req.email, req.photo_url.as_deref()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => db_error(e),
    }
}
