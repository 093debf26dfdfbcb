use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{model::maintenance::LogStatus, server::data::normalize_model_key};

/// Fields of a new maintenance log.
pub struct NewMaintenanceLog<'a> {
    pub equipment_name: Option<&'a str>,
    pub equipment_model: &'a str,
    pub defect_description: Option<&'a str>,
    pub technician_notes: Option<&'a str>,
    /// Diagnosis shown to the technician, as JSON
    pub diagnosis: Option<String>,
    pub status: LogStatus,
}

pub struct MaintenanceLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceLogRepository<'a> {
    /// Creates a new instance of [`MaintenanceLogRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new maintenance log
    pub async fn create(
        &self,
        log: NewMaintenanceLog<'_>,
    ) -> Result<entity::maintenance_log::Model, DbErr> {
        let log = entity::maintenance_log::ActiveModel {
            equipment_name: ActiveValue::Set(log.equipment_name.map(str::to_string)),
            equipment_model: ActiveValue::Set(log.equipment_model.trim().to_string()),
            equipment_model_key: ActiveValue::Set(normalize_model_key(log.equipment_model)),
            defect_description: ActiveValue::Set(log.defect_description.map(str::to_string)),
            technician_notes: ActiveValue::Set(log.technician_notes.map(str::to_string)),
            diagnosis: ActiveValue::Set(log.diagnosis),
            status: ActiveValue::Set(log.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db).await
    }

    /// Most recent resolved logs for an equipment model, newest first
    pub async fn find_resolved_by_model(
        &self,
        model: &str,
        limit: u64,
    ) -> Result<Vec<entity::maintenance_log::Model>, DbErr> {
        entity::prelude::MaintenanceLog::find()
            .filter(entity::maintenance_log::Column::EquipmentModelKey.eq(normalize_model_key(model)))
            .filter(entity::maintenance_log::Column::Status.eq(LogStatus::Resolved.as_str()))
            .order_by_desc(entity::maintenance_log::Column::CreatedAt)
            .order_by_desc(entity::maintenance_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Most recent logs of any status, newest first
    pub async fn list_recent(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::maintenance_log::Model>, DbErr> {
        entity::prelude::MaintenanceLog::find()
            .order_by_desc(entity::maintenance_log::Column::CreatedAt)
            .order_by_desc(entity::maintenance_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
