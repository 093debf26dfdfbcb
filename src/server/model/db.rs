//! Database model type aliases.
//!
//! Short names for the sea-orm models of the `entity` crate, used across repositories and
//! services.

/// Technical manual for an equipment model.
///
/// # Fields (from `entity::manual::Model`)
/// - `id` - Primary key
/// - `title` - Manual title shown in the library
/// - `brand` - Equipment manufacturer
/// - `model` - Equipment model as entered by the admin
/// - `model_key` - Trimmed, lower-cased model used for lookups (unique)
/// - `category` - `eletrico` or `mecanico`
/// - `content` - Full technical text used as prompt context
/// - `created_at` / `updated_at` - Timestamps
pub type ManualModel = entity::manual::Model;

/// Past defect and what the technician did about it.
///
/// `equipment_model_key` is the normalised model used to find the history for a diagnosis;
/// `diagnosis` holds the diagnosis JSON shown to the technician at the time.
pub type MaintenanceLogModel = entity::maintenance_log::Model;

/// Checklist template imported from a document; `sections` is JSON.
pub type ChecklistTemplateModel = entity::checklist_template::Model;

/// Finalised checklist run; `checked_items` is a JSON list of item ids.
pub type ChecklistReportModel = entity::checklist_report::Model;
