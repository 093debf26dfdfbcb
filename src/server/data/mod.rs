//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for each table and return the entity models as-is;
//! mapping to DTOs happens in the services.

pub mod checklist_report;
pub mod checklist_template;
pub mod maintenance_log;
pub mod manual;

/// Key used to match equipment models case-insensitively: trimmed and lower-cased.
pub fn normalize_model_key(model: &str) -> String {
    model.trim().to_lowercase()
}
