use sea_orm::DatabaseConnection;

use crate::{
    model::maintenance::{LogStatus, MaintenanceLogDto, RecordFeedbackDto},
    server::{
        data::maintenance_log::{MaintenanceLogRepository, NewMaintenanceLog},
        error::{diagnosis::DiagnosisError, Error},
        model::db::MaintenanceLogModel,
    },
};

/// Number of logs shown in the diagnosis history.
pub const HISTORY_LIMIT: u64 = 50;

/// Records technician feedback and reads the maintenance history.
pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    /// Creates a new instance of [`MaintenanceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores feedback on a diagnosis as a maintenance log.
    ///
    /// An effective diagnosis is stored as `Resolvido` and becomes context for future
    /// diagnoses of the same model; anything else is stored as `Pendente`.
    pub async fn record_feedback(
        &self,
        feedback: &RecordFeedbackDto,
    ) -> Result<MaintenanceLogDto, Error> {
        if feedback.equipment_model.trim().is_empty() {
            return Err(DiagnosisError::MissingEquipmentModel.into());
        }

        let status = if feedback.was_effective {
            LogStatus::Resolved
        } else {
            LogStatus::Pending
        };
        let diagnosis = feedback
            .diagnosis
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let log = MaintenanceLogRepository::new(self.db)
            .create(NewMaintenanceLog {
                equipment_name: non_blank(feedback.equipment_name.as_deref()),
                equipment_model: &feedback.equipment_model,
                defect_description: non_blank(feedback.defect_description.as_deref()),
                technician_notes: non_blank(feedback.technician_notes.as_deref()),
                diagnosis,
                status,
            })
            .await?;

        Ok(log_to_dto(log))
    }

    /// Latest maintenance logs, newest first
    pub async fn history(&self) -> Result<Vec<MaintenanceLogDto>, Error> {
        let logs = MaintenanceLogRepository::new(self.db)
            .list_recent(HISTORY_LIMIT)
            .await?;

        Ok(logs.into_iter().map(log_to_dto).collect())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn log_to_dto(log: MaintenanceLogModel) -> MaintenanceLogDto {
    MaintenanceLogDto {
        id: log.id,
        equipment_name: log.equipment_name,
        equipment_model: log.equipment_model,
        defect_description: log.defect_description,
        technician_notes: log.technician_notes,
        // Rows written before diagnoses were stored as JSON have free text here
        diagnosis: log
            .diagnosis
            .and_then(|diagnosis| serde_json::from_str(&diagnosis).ok()),
        status: LogStatus::from_stored(&log.status),
        created_at: log.created_at,
    }
}
