use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::client_error;

#[derive(Error, Debug)]
pub enum ManualError {
    #[error("Preencha o título e o modelo do manual.")]
    MissingFields,
    /// A manual already exists for the model and the request did not ask to overwrite it.
    #[error("O modelo {0} já existe.")]
    Conflict(String),
    #[error("Manual not found")]
    NotFound,
}

impl IntoResponse for ManualError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        client_error(status, self)
    }
}
