use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /users`.
///
/// Any `role` the client sends is ignored; registration always creates a
/// standard user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub name: Option<String>,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    pub photo_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// Body answered when registration is skipped.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
