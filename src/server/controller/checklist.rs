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
        checklist::{
            ChecklistReportDto, ChecklistReportReceiptDto, ChecklistTemplateDto,
            ImportTemplateDto,
        },
    },
    server::{error::Error, model::app::AppState, service::checklist::ChecklistService},
};

pub static CHECKLIST_TAG: &str = "checklist";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TemplateFilterParams {
    /// `torre`, `gerador`, `maquina_solda`, `outro` or `custom`
    pub equipment_type: Option<String>,
}

/// List checklist templates, optionally for one equipment type
#[utoipa::path(
    get,
    path = "/api/checklists/templates",
    tag = CHECKLIST_TAG,
    params(TemplateFilterParams),
    responses(
        (status = 200, description = "Built-in and imported templates", body = Vec<ChecklistTemplateDto>),
        (status = 400, description = "Unknown equipment type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_templates(
    State(state): State<AppState>,
    params: Result<Query<TemplateFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(params) = params?;

    let templates = ChecklistService::new(&state.db)
        .list_templates(params.equipment_type.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(templates)))
}

/// Derive a checklist template from an uploaded inspection document
#[utoipa::path(
    post,
    path = "/api/checklists/templates/import",
    tag = CHECKLIST_TAG,
    request_body = ImportTemplateDto,
    responses(
        (status = 201, description = "Imported template", body = ChecklistTemplateDto),
        (status = 400, description = "Missing file name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_template(
    State(state): State<AppState>,
    payload: Result<Json<ImportTemplateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(upload) = payload?;

    let template = ChecklistService::new(&state.db)
        .import_template(&upload.file_name)
        .await?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// Delete an imported checklist template
#[utoipa::path(
    delete,
    path = "/api/checklists/templates/{id}",
    tag = CHECKLIST_TAG,
    params(("id" = String, Path, description = "Template id")),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 400, description = "Built-in templates cannot be deleted", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    ChecklistService::new(&state.db).delete_template(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Finalise a checklist run
#[utoipa::path(
    post,
    path = "/api/checklists/reports",
    tag = CHECKLIST_TAG,
    request_body = ChecklistReportDto,
    responses(
        (status = 201, description = "Report stored", body = ChecklistReportReceiptDto),
        (status = 400, description = "Missing field or invalid e-mail", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_report(
    State(state): State<AppState>,
    payload: Result<Json<ChecklistReportDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(report) = payload?;

    let receipt = ChecklistService::new(&state.db)
        .submit_report(&report)
        .await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}
