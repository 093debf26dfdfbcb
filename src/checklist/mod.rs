//! Inspection checklists.
//!
//! Built-in templates, templates derived from uploaded inspection documents, the state of a
//! checklist being filled in, and validation of the final report.

pub mod catalog;
pub mod import;
pub mod report;
pub mod run;

pub use catalog::{built_in_templates, find_built_in, templates_for};
pub use import::template_from_upload;
pub use report::{validate_report, ReportError};
pub use run::ChecklistRun;
