pub use sea_orm_migration::prelude::*;

mod m20260110_000001_manual;
mod m20260110_000002_maintenance_log;
mod m20260112_000003_checklist_template;
mod m20260112_000004_checklist_report;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_manual::Migration),
            Box::new(m20260110_000002_maintenance_log::Migration),
            Box::new(m20260112_000003_checklist_template::Migration),
            Box::new(m20260112_000004_checklist_report::Migration),
        ]
    }
}
