use serde_json::{Map, Value};

pub const MAX_TEXT_CHARS: usize = 500;
pub const MIN_FONT_SIZE: i64 = 12;
pub const MAX_FONT_SIZE: i64 = 200;

const REQUIRED_FIELDS_ERROR: &str = "recipient_name and messages are required";

/// A creation request that has passed validation. Message entries keep their
/// raw JSON form so style hints the server never interprets survive storage
/// unchanged.
#[derive(Debug)]
pub struct ValidCreate {
    pub recipient_name: String,
    pub messages: Vec<Value>,
    pub theme_config: Value,
    pub audio_url: Option<String>,
    pub expires_in_days: Option<i64>,
}

/// Validate an untyped request body. Failures after the required-fields gate
/// accumulate in entry order rather than short-circuiting, so a client sees
/// everything wrong with its payload at once.
pub fn validate_create(body: &Value) -> Result<ValidCreate, Vec<String>> {
    let recipient_name = body
        .get("recipient_name")
        .and_then(Value::as_str)
        .unwrap_or("");

    let messages = body
        .get("messages")
        .and_then(Value::as_array)
        .filter(|m| !m.is_empty());

    // Both required fields are checked together and reported as one error.
    let messages = match messages {
        Some(m) if !recipient_name.is_empty() => m,
        _ => return Err(vec![REQUIRED_FIELDS_ERROR.to_string()]),
    };

    let mut errors = Vec::new();
    for entry in messages {
        validate_entry(entry, &mut errors);
    }

    let expires_in_days = match body.get("expires_in_days") {
        None | Some(Value::Null) => None,
        Some(v) => match v.as_i64() {
            Some(days) if days > 0 => Some(days),
            _ => {
                errors.push("expires_in_days must be a positive integer".to_string());
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidCreate {
        recipient_name: recipient_name.to_string(),
        messages: messages.clone(),
        theme_config: body
            .get("theme_config")
            .filter(|v| v.is_object())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())),
        audio_url: body
            .get("audio_url")
            .and_then(Value::as_str)
            .map(str::to_string),
        expires_in_days,
    })
}

fn validate_entry(entry: &Value, errors: &mut Vec<String>) {
    let text = entry.get("text").and_then(Value::as_str).unwrap_or("");
    if text.is_empty() {
        errors.push("Message text is required".to_string());
    } else if text.chars().count() > MAX_TEXT_CHARS {
        errors.push("Message text must be under 500 characters".to_string());
    }

    if let Some(size) = entry.get("fontSize").filter(|v| !v.is_null()) {
        match parse_font_size(size) {
            Some(s) if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&s) => {}
            Some(_) => errors.push("Font size must be between 12 and 200".to_string()),
            None => errors.push("Font size must be a valid number".to_string()),
        }
    }
}

// Clients send fontSize as either a number or a numeric string.
fn parse_font_size(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
