use serde::{Deserialize, Serialize};

// -- Create --

/// Body of a successful `POST /api/create`. `url` is the shareable view path
/// for the generated id (`/v/{id}`).
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCardResponse {
    pub message: String,
    pub id: String,
    pub url: String,
}

// -- Fetch --
//
// The 200 body of `GET /api/view/{id}` is `models::Card` serialized directly:
// nested blobs decoded, timestamps as ISO-8601.
