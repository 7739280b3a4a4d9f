use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde_json::Value;

use blush_db::StorageError;
use blush_db::models::CardRow;
use blush_types::api::CreateCardResponse;
use blush_types::models::Card;

use crate::AppState;
use crate::error::ApiError;
use crate::validation;

pub async fn create_card(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| {
        ApiError::Validation(vec!["Request body must be valid JSON".to_string()])
    })?;

    let valid = validation::validate_create(&body).map_err(ApiError::Validation)?;

    let id = blush_db::generate_id();
    let now = Utc::now();
    // Checked arithmetic: an absurd day count is bad input, not a panic.
    let expires_at = match valid.expires_in_days {
        Some(days) => Some(
            Duration::try_days(days)
                .and_then(|window| now.checked_add_signed(window))
                .ok_or_else(|| {
                    ApiError::Validation(vec!["expires_in_days is out of range".to_string()])
                })?,
        ),
        None => None,
    };

    let row = CardRow {
        id: id.clone(),
        recipient_name: valid.recipient_name,
        messages: serde_json::to_string(&valid.messages)?,
        theme_config: serde_json::to_string(&valid.theme_config)?,
        audio_url: valid.audio_url,
        created_at: now.to_rfc3339(),
        expires_at: expires_at.map(|at| at.to_rfc3339()),
    };

    // Run the blocking DB insert off the async runtime
    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.insert_card(&row)).await??;

    Ok((
        StatusCode::CREATED,
        Json(CreateCardResponse {
            message: "Blush created".to_string(),
            id: id.clone(),
            url: format!("/v/{id}"),
        }),
    ))
}

pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Card>, ApiError> {
    let db = state.clone();
    let lookup = id.clone();
    let row = tokio::task::spawn_blocking(move || db.db.get_card(&lookup))
        .await??
        .ok_or(ApiError::NotFound)?;

    // Expiry is checked on the raw row, before blob decode: an expired card
    // is logically gone even though it still physically exists.
    if let Some(raw) = &row.expires_at {
        let at = parse_timestamp(raw).ok_or_else(|| corrupt(&row.id, "expires_at", raw))?;
        if at <= Utc::now() {
            return Err(ApiError::Expired);
        }
    }

    Ok(Json(decode_card(row)?))
}

/// Shareable view link. Page rendering lives outside this service; the data
/// contract here is identical to the API fetch, 404/410 split included.
pub async fn view_card(
    state: State<AppState>,
    id: Path<String>,
) -> Result<Json<Card>, ApiError> {
    get_card(state, id).await
}

/// Decode the stored text blobs back into structured form. Round-trip
/// fidelity is the contract: whatever was encoded at creation comes back
/// identical. A blob that fails to decode is a storage-integrity failure.
fn decode_card(row: CardRow) -> Result<Card, ApiError> {
    let messages: Vec<Value> = serde_json::from_str(&row.messages)
        .map_err(|e| corrupt_with(&row.id, "messages", &e.to_string()))?;
    let theme_config: Value = serde_json::from_str(&row.theme_config)
        .map_err(|e| corrupt_with(&row.id, "theme_config", &e.to_string()))?;
    let created_at =
        parse_timestamp(&row.created_at).ok_or_else(|| corrupt(&row.id, "created_at", &row.created_at))?;
    let expires_at = match &row.expires_at {
        Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| corrupt(&row.id, "expires_at", raw))?),
        None => None,
    };

    Ok(Card {
        id: row.id,
        recipient_name: row.recipient_name,
        messages,
        theme_config,
        audio_url: row.audio_url,
        created_at,
        expires_at,
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>().ok().or_else(|| {
        // SQLite's own datetime() format carries no timezone; treat as UTC.
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|ndt| ndt.and_utc())
    })
}

fn corrupt(id: &str, field: &'static str, raw: &str) -> ApiError {
    corrupt_with(id, field, &format!("unparseable value {raw:?}"))
}

fn corrupt_with(id: &str, field: &'static str, detail: &str) -> ApiError {
    ApiError::Storage(StorageError::Corrupt {
        id: id.to_string(),
        field,
        detail: detail.to_string(),
    })
}
