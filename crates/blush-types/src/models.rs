use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A card as the access layer sees it, with nested blobs already decoded.
/// Message entries and theme settings stay `serde_json::Value` so client
/// style hints the server never interprets round-trip byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub recipient_name: String,
    pub messages: Vec<Value>,
    pub theme_config: Value,
    pub audio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Card {
    /// A card is logically gone once its expiry passes, even though the row
    /// still exists in storage.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
