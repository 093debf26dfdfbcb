//! HTTP controller endpoints for the Tecnoloc API.
//!
//! Controllers extract the request, call the matching service and turn the result into a
//! response. Every endpoint is annotated with utoipa for the OpenAPI document.

pub mod checklist;
pub mod diagnose;
pub mod diagnosis;
pub mod maintenance;
pub mod manual;
