use sea_orm_migration::{prelude::*, schema::*};

static IDX_MAINTENANCE_LOG_MODEL_KEY_STATUS: &str = "idx-maintenance_log-equipment_model_key-status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceLog::Id))
                    .col(string_null(MaintenanceLog::EquipmentName))
                    .col(string(MaintenanceLog::EquipmentModel))
                    .col(string(MaintenanceLog::EquipmentModelKey))
                    .col(text_null(MaintenanceLog::DefectDescription))
                    .col(text_null(MaintenanceLog::TechnicianNotes))
                    .col(text_null(MaintenanceLog::Diagnosis))
                    .col(string(MaintenanceLog::Status))
                    .col(timestamp(MaintenanceLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAINTENANCE_LOG_MODEL_KEY_STATUS)
                    .table(MaintenanceLog::Table)
                    .col(MaintenanceLog::EquipmentModelKey)
                    .col(MaintenanceLog::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAINTENANCE_LOG_MODEL_KEY_STATUS)
                    .table(MaintenanceLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceLog {
    Table,
    Id,
    EquipmentName,
    EquipmentModel,
    EquipmentModelKey,
    DefectDescription,
    TechnicianNotes,
    Diagnosis,
    Status,
    CreatedAt,
}
