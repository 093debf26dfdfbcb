use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChecklistTemplate::Table)
                    .if_not_exists()
                    .col(string(ChecklistTemplate::Id).primary_key())
                    .col(string(ChecklistTemplate::Name))
                    .col(string(ChecklistTemplate::EquipmentType))
                    .col(text(ChecklistTemplate::Sections))
                    .col(timestamp(ChecklistTemplate::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChecklistTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChecklistTemplate {
    Table,
    Id,
    Name,
    EquipmentType,
    Sections,
    CreatedAt,
}
