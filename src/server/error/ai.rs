use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure talking to the AI provider.
///
/// Unlike other internal errors the message is passed through to the technician, so a
/// rejected credential or quota error is visible in the page.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Failed to build AI provider client: {0}")]
    Client(reqwest::Error),
    #[error("Failed to reach AI provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Provider { status: u16, message: String },
    #[error("AI provider returned an unreadable answer: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("AI provider returned no answer{}", blocked_suffix(.block_reason))]
    EmptyResponse { block_reason: Option<String> },
}

fn blocked_suffix(block_reason: &Option<String>) -> String {
    match block_reason {
        Some(reason) => format!(" (blocked: {})", reason),
        None => String::new(),
    }
}

impl IntoResponse for AiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Provider { status, .. } => {
                tracing::warn!(provider_status = %status, "{}", self)
            }
            _ => tracing::error!("{}", self),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(self.to_string())),
        )
            .into_response()
    }
}
