use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{MaintenanceLogDto, RecordFeedbackDto},
    },
    server::{error::Error, model::app::AppState, service::maintenance::MaintenanceService},
};

pub static MAINTENANCE_TAG: &str = "maintenance";

/// Diagnosis history, newest first
#[utoipa::path(
    get,
    path = "/api/maintenance-logs",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Latest maintenance logs", body = Vec<MaintenanceLogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_maintenance_logs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let logs = MaintenanceService::new(&state.db).history().await?;

    Ok((StatusCode::OK, Json(logs)))
}

/// Record whether a diagnosis solved the problem
#[utoipa::path(
    post,
    path = "/api/maintenance-logs",
    tag = MAINTENANCE_TAG,
    request_body = RecordFeedbackDto,
    responses(
        (status = 201, description = "Stored maintenance log", body = MaintenanceLogDto),
        (status = 400, description = "Missing equipment model", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_feedback(
    State(state): State<AppState>,
    payload: Result<Json<RecordFeedbackDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(feedback) = payload?;

    let log = MaintenanceService::new(&state.db)
        .record_feedback(&feedback)
        .await?;

    Ok((StatusCode::CREATED, Json(log)))
}
