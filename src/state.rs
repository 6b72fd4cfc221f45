//! Shared state of the health server.

use sea_orm::DatabaseConnection;

/// State handed to axum handlers.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections as the bot.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
