//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use tecnoloc::server::{
    ai::gemini::{GeminiClient, GeminiConfig},
    model::app::AppState,
};
use tecnoloc_test_utils::prelude::*;

/// Extension trait for [`TestContext`] building server state against the mock AI provider
pub trait TestContextExt {
    fn ai_client(&self) -> GeminiClient;
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn ai_client(&self) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_url: self.server_url(),
            api_key: TEST_GEMINI_API_KEY.to_string(),
            model: TEST_GEMINI_MODEL.to_string(),
        })
        .expect("Failed to build AI client")
    }

    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            ai_client: self.ai_client(),
        }
    }
}

/// Reads a response body as JSON
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
