pub mod models;
pub mod object_id;
pub mod resolver;
pub mod results;
pub mod test_utils;

pub use object_id::ObjectId;
pub use resolver::{RecordKey, ResolveError, resolve};

use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::path::Path;

/// Opens the database and brings the schema up to date.
///
/// `path_or_url` is either a full DSN or a SQLite file path; for a path the
/// parent directory and the file are created when missing.
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = if path_or_url.starts_with("sqlite:") || path_or_url.contains("://") {
        path_or_url.to_owned()
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(path_or_url).parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), error = %e, "could not create database directory");
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    let db = Database::connect(&url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!(url = %url, "database ready");
    Ok(db)
}
