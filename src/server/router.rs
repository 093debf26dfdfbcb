//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, Swagger UI is served
//! at `/api/docs`, and the open CORS policy the browser client relies on is applied to every
//! API route.

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::options,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/diagnose` - Forward a prompt and optional image to the AI provider
/// - `POST /api/diagnosis` - Run the full diagnosis pipeline for a defect report
/// - `GET /api/maintenance-logs` - Diagnosis history, newest first
/// - `POST /api/maintenance-logs` - Record technician feedback on a diagnosis
/// - `GET /api/manuals` - List manuals, optionally filtered by a search term
/// - `GET /api/manuals/lookup` - Manual for an equipment model
/// - `POST /api/manuals` - Create or overwrite the manual for a model
/// - `DELETE /api/manuals/{id}` - Delete a manual
/// - `GET /api/checklists/templates` - Checklist templates, optionally by equipment type
/// - `POST /api/checklists/templates/import` - Derive a template from an uploaded document
/// - `DELETE /api/checklists/templates/{id}` - Delete an imported template
/// - `POST /api/checklists/reports` - Finalise a checklist run
///
/// Requests using a method a route does not support receive `405` with an [`ErrorDto`] body.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tecnoloc", description = "Tecnoloc maintenance assistant API"), tags(
        (name = controller::diagnose::DIAGNOSE_TAG, description = "AI provider proxy"),
        (name = controller::diagnosis::DIAGNOSIS_TAG, description = "Diagnosis pipeline"),
        (name = controller::maintenance::MAINTENANCE_TAG, description = "Maintenance history"),
        (name = controller::manual::MANUAL_TAG, description = "Technical manuals"),
        (name = controller::checklist::CHECKLIST_TAG, description = "Inspection checklists"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::diagnose::diagnose))
        .routes(routes!(controller::diagnosis::diagnose_defect))
        .routes(routes!(
            controller::maintenance::list_maintenance_logs,
            controller::maintenance::record_feedback
        ))
        .routes(routes!(
            controller::manual::list_manuals,
            controller::manual::save_manual
        ))
        .routes(routes!(controller::manual::lookup_manual))
        .routes(routes!(controller::manual::delete_manual))
        .routes(routes!(controller::checklist::list_templates))
        .routes(routes!(controller::checklist::import_template))
        .routes(routes!(controller::checklist::delete_template))
        .routes(routes!(controller::checklist::submit_report))
        .split_for_parts();

    routes
        .route("/api/diagnose", options(|| async { StatusCode::OK }))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Any origin may call the API; credentials are never sent.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto::new("Method Not Allowed")),
    )
}
