use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        diagnosis::{Diagnosis, DiagnosisRequestDto},
    },
    server::{error::Error, model::app::AppState, service::diagnosis::DiagnosisService},
};

pub static DIAGNOSIS_TAG: &str = "diagnosis";

/// Diagnose a defect using the manual and resolved history for the equipment model
#[utoipa::path(
    post,
    path = "/api/diagnosis",
    tag = DIAGNOSIS_TAG,
    request_body = DiagnosisRequestDto,
    responses(
        (status = 200, description = "Possible causes and solutions", body = Diagnosis),
        (status = 400, description = "Incomplete form or invalid image", body = ErrorDto),
        (status = 500, description = "AI provider error", body = ErrorDto),
        (status = 502, description = "Model answer is not a valid diagnosis", body = ErrorDto)
    ),
)]
pub async fn diagnose_defect(
    State(state): State<AppState>,
    payload: Result<Json<DiagnosisRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(form) = payload?;

    let diagnosis = DiagnosisService::new(&state.db, &state.ai_client)
        .diagnose(&form)
        .await?;

    Ok((StatusCode::OK, Json(diagnosis)))
}
