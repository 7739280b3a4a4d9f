use thiserror::Error;

/// Failures of the record store itself. Distinct from "no such card", which
/// queries report as `Ok(None)` — a `StorageError` always maps to a 500 and
/// is safe to retry.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database lock poisoned")]
    LockPoisoned,

    /// A persisted field no longer decodes. Storage-integrity failure,
    /// never reported as not-found.
    #[error("corrupt {field} on card {id}: {detail}")]
    Corrupt {
        id: String,
        field: &'static str,
        detail: String,
    },
}
