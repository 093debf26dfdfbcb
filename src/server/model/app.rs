use sea_orm::DatabaseConnection;

use crate::server::ai::gemini::GeminiClient;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub ai_client: GeminiClient,
}
