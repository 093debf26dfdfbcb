//! Error types for the Tecnoloc server.
//!
//! Each request domain (AI provider, diagnosis, manuals, checklists) has its own error enum
//! implementing `IntoResponse`, so handlers can return them with `?` and every response body is
//! an [`ErrorDto`]. [`config::ConfigError`] only occurs at startup and never reaches a handler.

pub mod ai;
pub mod checklist;
pub mod config;
pub mod diagnosis;
pub mod manual;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        ai::AiError, checklist::ChecklistError, diagnosis::DiagnosisError, manual::ManualError,
    },
};

/// Main error type for the server application.
///
/// Aggregates the domain errors and external library errors so that `?` converts them
/// automatically. The `IntoResponse` implementation delegates to the domain error, and treats
/// everything else as an internal error.
#[derive(Error, Debug)]
pub enum Error {
    /// AI provider error (transport, provider rejection, empty answer).
    #[error(transparent)]
    AiError(#[from] AiError),
    /// Diagnosis request or model answer could not be used.
    #[error(transparent)]
    DiagnosisError(#[from] DiagnosisError),
    /// Manual validation, conflict or lookup error.
    #[error(transparent)]
    ManualError(#[from] ManualError),
    /// Checklist template or report error.
    #[error(transparent)]
    ChecklistError(#[from] ChecklistError),
    /// Request body is not the JSON the endpoint expects.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Query string does not match the endpoint's parameters.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),
    /// Path segment could not be parsed (e.g. a non-numeric id).
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    /// Stored JSON column could not be read or written.
    #[error("Failed to (de)serialize stored JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AiError(err) => err.into_response(),
            Self::DiagnosisError(err) => err.into_response(),
            Self::ManualError(err) => err.into_response(),
            Self::ChecklistError(err) => err.into_response(),
            Self::JsonRejection(rejection) => client_error(rejection.status(), rejection.body_text()),
            Self::QueryRejection(rejection) => client_error(rejection.status(), rejection.body_text()),
            Self::PathRejection(rejection) => client_error(rejection.status(), rejection.body_text()),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Response for an error caused by the request itself; the message is shown to the user.
pub(crate) fn client_error(status: StatusCode, err: impl std::fmt::Display) -> Response {
    tracing::debug!("{}", err);

    (status, Json(ErrorDto::new(err.to_string()))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
