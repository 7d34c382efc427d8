use crate::auth::{AuthError, claims::AuthUser, verify_token};
use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use db::models::user::Model as UserModel;
use util::state::AppState;

// --- Token and role guards ---
//
// Both guards are attached with `route_layer`; when stacked, `require_admin`
// must be the inner layer so it only ever sees verified claims.

/// Verifies the bearer token and stores the decoded claims in request extensions.
pub async fn require_authenticated(
    State(app_state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    let claims = verify_token(header, app_state.decoding_key()).inspect_err(|e| {
        tracing::warn!(path = %req.uri().path(), reason = %e, "rejected request at token gate");
    })?;

    req.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(req).await)
}

/// Admin-only guard.
///
/// Looks the caller up by the `email` claim and checks the live role; the token
/// itself carries no role. Fails closed on store errors.
pub async fn require_admin(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let email = match req.extensions().get::<AuthUser>() {
        Some(AuthUser(claims)) => claims.email().map(str::to_owned),
        None => return Err(AuthError::Unauthorized.into()),
    };

    // A token without an email cannot match any user.
    let Some(email) = email else {
        return Err(AuthError::Forbidden.into());
    };

    match UserModel::find_by_email(app_state.db(), &email).await {
        Ok(Some(user)) if user.is_admin() => Ok(next.run(req).await),
        Ok(_) => {
            tracing::warn!(email = %email, "admin access denied");
            Err(AuthError::Forbidden.into())
        }
        Err(e) => {
            tracing::error!(error = %e, email = %email, "DB error while checking role; denying access");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {e}"))),
            ))
        }
    }
}
