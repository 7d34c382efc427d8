use crate::auth::issue_token;
use crate::response::{ApiResponse, Empty};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use serde_json::{Map, Value};
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub fn jwt_routes() -> Router<AppState> {
    Router::new().route("/jwt", post(create_token))
}

/// POST /jwt
///
/// Signs the posted JSON object into a bearer token. No credentials are
/// checked; the object becomes the token's claims as-is.
///
/// ### Request Body
/// ```json
/// { "email": "someone@example.com" }
/// ```
///
/// ### Response: 200 OK
/// ```json
/// { "token": "<jwt>" }
/// ```
pub async fn create_token(
    State(app_state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> impl IntoResponse {
    match issue_token(&app_state, payload) {
        Ok((token, expiry)) => {
            tracing::debug!(expires_at = %expiry, "issued token");
            (StatusCode::OK, Json(TokenResponse { token })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to sign token");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to issue token")),
            )
                .into_response()
        }
    }
}
