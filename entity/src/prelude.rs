pub use super::checklist_report::Entity as ChecklistReport;
pub use super::checklist_template::Entity as ChecklistTemplate;
pub use super::maintenance_log::Entity as MaintenanceLog;
pub use super::manual::Entity as Manual;
