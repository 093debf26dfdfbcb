use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{checklist::ReportError, server::error::client_error};

#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("Informe o nome do arquivo do checklist.")]
    MissingFileName,
    #[error("Unknown equipment type: {0}")]
    UnknownEquipmentType(String),
    #[error("Checklist template {0} not found")]
    TemplateNotFound(String),
    #[error("Checklist template {0} is built in and cannot be deleted")]
    BuiltIn(String),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl IntoResponse for ChecklistError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::TemplateNotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingFileName
            | Self::UnknownEquipmentType(_)
            | Self::BuiltIn(_)
            | Self::Report(_) => StatusCode::BAD_REQUEST,
        };

        client_error(status, self)
    }
}
