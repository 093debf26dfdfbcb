use sea_orm_migration::{prelude::*, schema::*};

static IDX_CHECKLIST_REPORT_TEMPLATE_ID: &str = "idx-checklist_report-template_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChecklistReport::Table)
                    .if_not_exists()
                    .col(pk_auto(ChecklistReport::Id))
                    .col(string(ChecklistReport::TemplateId))
                    .col(string_null(ChecklistReport::EquipmentName))
                    .col(string(ChecklistReport::Patrimonio))
                    .col(string_null(ChecklistReport::Horimetro))
                    .col(string(ChecklistReport::TechnicianName))
                    .col(string_null(ChecklistReport::SupervisorEmail))
                    .col(text_null(ChecklistReport::Observation))
                    .col(text(ChecklistReport::CheckedItems))
                    .col(integer(ChecklistReport::TotalItems))
                    .col(timestamp(ChecklistReport::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Built-in templates live in code, so the template id is indexed rather than
        // constrained by a foreign key.
        manager
            .create_index(
                Index::create()
                    .name(IDX_CHECKLIST_REPORT_TEMPLATE_ID)
                    .table(ChecklistReport::Table)
                    .col(ChecklistReport::TemplateId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHECKLIST_REPORT_TEMPLATE_ID)
                    .table(ChecklistReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChecklistReport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ChecklistReport {
    Table,
    Id,
    TemplateId,
    EquipmentName,
    Patrimonio,
    Horimetro,
    TechnicianName,
    SupervisorEmail,
    Observation,
    CheckedItems,
    TotalItems,
    CreatedAt,
}
