#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use tecnoloc::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let ai_client = match startup::build_ai_client(&config) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to build AI client: {}", e);
                std::process::exit(1);
            }
        };
        let db = match startup::connect_to_database(&config).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("Failed to connect to database: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(model = ai_client.model(), "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(AppState { db, ai_client });
        router = router.merge(server_routes);

        Ok(router)
    })
}
