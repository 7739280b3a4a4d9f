use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};

use crate::AppState;
use crate::cards;
use crate::middleware::require_json;

/// Build the service router. CORS and request-trace layers are stacked on by
/// the server binary.
pub fn router(state: AppState) -> Router {
    let create = Router::new()
        .route("/api/create", post(cards::create_card))
        .layer(from_fn(require_json));

    Router::new()
        .merge(create)
        .route("/api/view/{id}", get(cards::get_card))
        .route("/v/{id}", get(cards::view_card))
        .with_state(state)
}
