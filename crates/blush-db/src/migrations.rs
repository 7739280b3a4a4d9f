use crate::StorageError;
use rusqlite::Connection;
use tracing::info;

/// Idempotent schema setup, run once when the database is opened.
/// `messages` and `theme_config` are JSON text blobs: portable across
/// backends without native JSON columns, decoded by the access layer.
pub fn run(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS cards (
            id              TEXT PRIMARY KEY,
            recipient_name  TEXT NOT NULL CHECK (recipient_name <> ''),
            messages        TEXT NOT NULL,
            theme_config    TEXT NOT NULL DEFAULT '{}',
            audio_url       TEXT,
            created_at      TEXT NOT NULL,
            expires_at      TEXT
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
