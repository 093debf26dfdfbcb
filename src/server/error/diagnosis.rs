use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    diagnosis::{DiagnosisParseError, IncompleteForm, InvalidImage},
    server::error::client_error,
};

#[derive(Error, Debug)]
pub enum DiagnosisError {
    #[error("Prompt is required")]
    EmptyPrompt,
    #[error("Informe o modelo do equipamento.")]
    MissingEquipmentModel,
    #[error(transparent)]
    IncompleteForm(#[from] IncompleteForm),
    #[error(transparent)]
    InvalidImage(#[from] InvalidImage),
    /// The model answered, but not with the JSON the diagnosis page expects.
    #[error(transparent)]
    Parse(#[from] DiagnosisParseError),
}

impl IntoResponse for DiagnosisError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmptyPrompt
            | Self::MissingEquipmentModel
            | Self::IncompleteForm(_)
            | Self::InvalidImage(_) => StatusCode::BAD_REQUEST,
            Self::Parse(_) => StatusCode::BAD_GATEWAY,
        };

        client_error(status, self)
    }
}
