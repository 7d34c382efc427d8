use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded token payload.
///
/// `payload` holds whatever object the caller handed to `POST /jwt`; the issuer
/// only owns `iat` and `exp`. Nothing in here is trusted until the signature
/// has been verified.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    /// The `email` claim, when present and a string.
    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(Value::as_str)
    }
}

/// Verified claims, placed in request extensions by `require_authenticated`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
