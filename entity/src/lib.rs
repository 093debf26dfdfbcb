//! SeaORM entities for the Tecnoloc database schema.

pub mod prelude;

pub mod checklist_report;
pub mod checklist_template;
pub mod maintenance_log;
pub mod manual;
