/// Database row types — these map directly to SQLite rows.
/// Distinct from the blush-types API models to keep the DB layer independent;
/// `messages` and `theme_config` are the raw JSON text blobs.
pub struct CardRow {
    pub id: String,
    pub recipient_name: String,
    pub messages: String,
    pub theme_config: String,
    pub audio_url: Option<String>,
    pub created_at: String,
    pub expires_at: Option<String>,
}
