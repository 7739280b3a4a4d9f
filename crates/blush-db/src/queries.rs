use crate::Database;
use crate::StorageError;
use crate::models::CardRow;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    /// Persist a fully-populated card. A single atomic insert: either the
    /// whole row lands or nothing does.
    pub fn insert_card(&self, row: &CardRow) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO cards (id, recipient_name, messages, theme_config, audio_url, created_at, expires_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    row.id,
                    row.recipient_name,
                    row.messages,
                    row.theme_config,
                    row.audio_url,
                    row.created_at,
                    row.expires_at,
                ],
            )?;
            Ok(())
        })
    }

    /// Fetch by id. `Ok(None)` means no such card; errors are storage
    /// failures, never "not found".
    pub fn get_card(&self, id: &str) -> Result<Option<CardRow>, StorageError> {
        self.with_conn(|conn| query_card(conn, id))
    }
}

fn query_card(conn: &Connection, id: &str) -> Result<Option<CardRow>, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT id, recipient_name, messages, theme_config, audio_url, created_at, expires_at
         FROM cards WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(CardRow {
                id: row.get(0)?,
                recipient_name: row.get(1)?,
                messages: row.get(2)?,
                theme_config: row.get(3)?,
                audio_url: row.get(4)?,
                created_at: row.get(5)?,
                expires_at: row.get(6)?,
            })
        })
        .optional()?;

    Ok(row)
}
