use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        manual::{ManualDto, SaveManualDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::manual::{ManualService, SaveOutcome},
    },
};

pub static MANUAL_TAG: &str = "manual";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ManualSearchParams {
    /// Case-insensitive term matched against title, brand and model
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ManualLookupParams {
    /// Equipment model, matched case-insensitively
    pub model: String,
}

/// List manuals, optionally filtered by a search term
#[utoipa::path(
    get,
    path = "/api/manuals",
    tag = MANUAL_TAG,
    params(ManualSearchParams),
    responses(
        (status = 200, description = "Matching manuals, most recent first", body = Vec<ManualDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_manuals(
    State(state): State<AppState>,
    params: Result<Query<ManualSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(params) = params?;

    let manuals = ManualService::new(&state.db)
        .list(params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(manuals)))
}

/// Get the manual for an equipment model
#[utoipa::path(
    get,
    path = "/api/manuals/lookup",
    tag = MANUAL_TAG,
    params(ManualLookupParams),
    responses(
        (status = 200, description = "Manual for the model", body = ManualDto),
        (status = 400, description = "Missing model parameter", body = ErrorDto),
        (status = 404, description = "No manual for the model", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_manual(
    State(state): State<AppState>,
    params: Result<Query<ManualLookupParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(params) = params?;

    let manual = ManualService::new(&state.db).lookup(&params.model).await?;

    Ok((StatusCode::OK, Json(manual)))
}

/// Create the manual for a model, or overwrite it when `overwrite` is set
#[utoipa::path(
    post,
    path = "/api/manuals",
    tag = MANUAL_TAG,
    request_body = SaveManualDto,
    responses(
        (status = 201, description = "Manual created", body = ManualDto),
        (status = 200, description = "Existing manual overwritten", body = ManualDto),
        (status = 400, description = "Missing title or model", body = ErrorDto),
        (status = 409, description = "A manual already exists for the model", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_manual(
    State(state): State<AppState>,
    payload: Result<Json<SaveManualDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(manual) = payload?;

    let (manual, outcome) = ManualService::new(&state.db).save(&manual).await?;

    let status = match outcome {
        SaveOutcome::Created => StatusCode::CREATED,
        SaveOutcome::Overwritten => StatusCode::OK,
    };

    Ok((status, Json(manual)))
}

/// Delete a manual
#[utoipa::path(
    delete,
    path = "/api/manuals/{id}",
    tag = MANUAL_TAG,
    params(("id" = i32, Path, description = "Manual id")),
    responses(
        (status = 204, description = "Manual deleted"),
        (status = 400, description = "Id is not a number", body = ErrorDto),
        (status = 404, description = "Manual not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_manual(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    ManualService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
