use axum::Json;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Reject requests whose body is not declared as JSON before the handler
/// runs. Charset parameters (`application/json; charset=utf-8`) pass.
pub async fn require_json(req: Request, next: Next) -> Response {
    let is_json = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("application/json")
        });

    if !is_json {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Content-Type must be application/json" })),
        )
            .into_response();
    }

    next.run(req).await
}
