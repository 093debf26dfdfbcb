use sea_orm::DatabaseConnection;

use crate::server::{
    ai::gemini::{GeminiClient, GeminiConfig},
    config::Config,
    error::Error,
};

/// Build the AI provider client from the configured credential and model
pub fn build_ai_client(config: &Config) -> Result<GeminiClient, Error> {
    let ai_client = GeminiClient::new(GeminiConfig {
        api_url: config.gemini_api_url.clone(),
        api_key: config.gemini_api_key.clone(),
        model: config.gemini_model.clone(),
    })?;

    Ok(ai_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
