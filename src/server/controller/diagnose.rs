use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        diagnosis::{DiagnoseRequestDto, DiagnoseResponseDto},
    },
    server::{error::Error, model::app::AppState, service::diagnose::DiagnoseService},
};

pub static DIAGNOSE_TAG: &str = "diagnose";

/// Forward a prompt, and optionally an image, to the AI provider
///
/// The provider credential never leaves the server. Provider failures are returned with the
/// provider's own message.
#[utoipa::path(
    post,
    path = "/api/diagnose",
    tag = DIAGNOSE_TAG,
    request_body = DiagnoseRequestDto,
    responses(
        (status = 200, description = "Text produced by the model", body = DiagnoseResponseDto),
        (status = 400, description = "Empty prompt or invalid image", body = ErrorDto),
        (status = 405, description = "Method not allowed", body = ErrorDto),
        (status = 500, description = "AI provider error", body = ErrorDto)
    ),
)]
pub async fn diagnose(
    State(state): State<AppState>,
    payload: Result<Json<DiagnoseRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload?;

    let result = DiagnoseService::new(&state.ai_client)
        .forward(&request)
        .await?;

    Ok((StatusCode::OK, Json(DiagnoseResponseDto { result })))
}
