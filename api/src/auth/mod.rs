pub mod claims;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use crate::response::{ApiResponse, Empty};
use axum::{Json, http::StatusCode};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};
use util::state::AppState;

/// Reasons a request fails the token gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("unauthorized access")]
    Unauthorized,
    /// A credential was sent but is invalid, expired, or lacks privilege.
    #[error("forbidden access")]
    Forbidden,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl From<AuthError> for (StatusCode, Json<ApiResponse<Empty>>) {
    fn from(err: AuthError) -> Self {
        (err.status(), Json(ApiResponse::error(err.to_string())))
    }
}

/// Signs `payload` into a token that expires after the configured duration.
///
/// The payload is embedded as-is; any `iat`/`exp` keys it carries are replaced
/// by the issuer's own. Returns the token and its expiry.
pub fn issue_token(
    app_state: &AppState,
    mut payload: Map<String, Value>,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expiry = now + Duration::minutes(app_state.jwt_duration_minutes());

    payload.remove("iat");
    payload.remove("exp");

    let claims = Claims {
        payload,
        iat: now.timestamp() as usize,
        exp: expiry.timestamp().max(0) as usize,
    };

    let token = encode(&Header::default(), &claims, app_state.encoding_key())?;
    Ok((token, expiry))
}

/// Validates the raw `Authorization` header value and returns its claims.
///
/// The token is whatever follows the first space; the scheme word in front of
/// it is not inspected. A missing header is `Unauthorized`, anything that fails
/// signature or expiry checks is `Forbidden`.
pub fn verify_token(header: Option<&str>, key: &DecodingKey) -> Result<Claims, AuthError> {
    let header = header.ok_or(AuthError::Unauthorized)?;
    let token = header.split_once(' ').map(|(_, token)| token).unwrap_or("");

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(token, key, &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AuthError::Forbidden
        })
}
