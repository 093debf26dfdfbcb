use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::model::checklist::ChecklistReportDto;

pub struct ChecklistReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChecklistReportRepository<'a> {
    /// Creates a new instance of [`ChecklistReportRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a finalised checklist run
    ///
    /// `checked_items` is the JSON encoded list of checked item ids, `total_items` the number
    /// of items in the template the run was filled from. Blank optional fields are stored as
    /// `NULL`.
    pub async fn create(
        &self,
        report: &ChecklistReportDto,
        checked_items: String,
        total_items: i32,
    ) -> Result<entity::checklist_report::Model, DbErr> {
        fn non_blank(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        let report = entity::checklist_report::ActiveModel {
            template_id: ActiveValue::Set(report.template_id.clone()),
            equipment_name: ActiveValue::Set(non_blank(&report.equipment_name)),
            patrimonio: ActiveValue::Set(report.patrimonio.trim().to_string()),
            horimetro: ActiveValue::Set(non_blank(&report.horimetro)),
            technician_name: ActiveValue::Set(report.technician_name.trim().to_string()),
            supervisor_email: ActiveValue::Set(non_blank(&report.supervisor_email)),
            observation: ActiveValue::Set(non_blank(&report.observation)),
            checked_items: ActiveValue::Set(checked_items),
            total_items: ActiveValue::Set(total_items),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        report.insert(self.db).await
    }
}
