//! Two-phase identifier resolution.
//!
//! Menu items were persisted under two identifier representations over time:
//! generated typed identifiers and raw strings taken from imported data. A caller
//! only ever has the text, so every keyed read or write goes through [`resolve`],
//! which tries the typed representation first and the raw string second.
//!
//! This is kept as a permanent compatibility shim; persisted identifiers are not
//! migrated to a single representation.

use crate::object_id::ObjectId;
use sea_orm::DbErr;
use std::fmt;
use std::future::Future;

/// One concrete representation of a record identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    Typed(ObjectId),
    Raw(String),
}

impl RecordKey {
    /// The identifier text as persisted.
    pub fn as_text(&self) -> String {
        match self {
            RecordKey::Typed(oid) => oid.to_hex(),
            RecordKey::Raw(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Typed(oid) => write!(f, "ObjectId({oid})"),
            RecordKey::Raw(raw) => write!(f, "\"{raw}\""),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no record matches identifier '{0}'")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Runs `op` against the typed form of `raw_id`, then against the raw string form.
///
/// `op` reports a match by returning `Some`. The first phase runs only when
/// `raw_id` is a syntactically valid typed identifier; a malformed one goes
/// straight to the raw phase. When neither phase matches the result is
/// [`ResolveError::NotFound`]. Store errors abort immediately.
pub async fn resolve<T, F, Fut>(raw_id: &str, mut op: F) -> Result<T, ResolveError>
where
    F: FnMut(RecordKey) -> Fut,
    Fut: Future<Output = Result<Option<T>, DbErr>>,
{
    if let Ok(oid) = raw_id.parse::<ObjectId>() {
        if let Some(found) = op(RecordKey::Typed(oid)).await? {
            return Ok(found);
        }
        tracing::debug!(id = raw_id, "typed lookup missed, retrying as raw string");
    }

    op(RecordKey::Raw(raw_id.to_owned()))
        .await?
        .ok_or_else(|| ResolveError::NotFound(raw_id.to_owned()))
}
