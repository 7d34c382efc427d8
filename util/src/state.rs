//! Application state container shared across Axum route handlers and middleware.
//!
//! The state owns the database connection and the token signing material. It is
//! built once at startup and handed to the router, so no handler reaches for a
//! global store handle.

use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    jwt_encoding_key: EncodingKey,
    jwt_decoding_key: DecodingKey,
    jwt_duration_minutes: i64,
    menu_delete_requires_admin: bool,
}

impl AppState {
    /// Creates a new `AppState` around an open connection and a shared signing secret.
    ///
    /// # Arguments
    ///
    /// * `db` - A SeaORM `DatabaseConnection`.
    /// * `jwt_secret` - Secret shared by token issuance and verification.
    /// * `jwt_duration_minutes` - Lifetime of issued tokens.
    pub fn new(db: DatabaseConnection, jwt_secret: &str, jwt_duration_minutes: i64) -> Self {
        Self {
            db,
            jwt_encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            jwt_decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            jwt_duration_minutes,
            menu_delete_requires_admin: false,
        }
    }

    /// Builds the state from the global [`AppConfig`].
    pub fn from_config(db: DatabaseConnection) -> Self {
        let cfg = AppConfig::global();
        Self::new(db, &cfg.jwt_secret, cfg.jwt_duration_minutes)
            .with_menu_delete_requires_admin(cfg.menu_delete_requires_admin)
    }

    /// Puts `DELETE /deleteMenuItem/{id}` behind the admin gate.
    pub fn with_menu_delete_requires_admin(mut self, required: bool) -> Self {
        self.menu_delete_requires_admin = required;
        self
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Used at shutdown, where the connection is closed by value.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.jwt_encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.jwt_decoding_key
    }

    pub fn jwt_duration_minutes(&self) -> i64 {
        self.jwt_duration_minutes
    }

    pub fn menu_delete_requires_admin(&self) -> bool {
        self.menu_delete_requires_admin
    }
}
