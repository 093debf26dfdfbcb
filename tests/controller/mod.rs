//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with the state and extractors axum would build, then the
//! response status and body are checked against the API contract.

mod checklist;
mod diagnose;
mod diagnosis;
mod maintenance;
mod manual;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tecnoloc::model::api::ErrorDto;
use tecnoloc_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
