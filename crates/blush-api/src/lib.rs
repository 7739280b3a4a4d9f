pub mod cards;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use blush_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}
