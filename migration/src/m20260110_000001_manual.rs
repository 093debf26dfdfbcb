use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Manual::Table)
                    .if_not_exists()
                    .col(pk_auto(Manual::Id))
                    .col(string(Manual::Title))
                    .col(string(Manual::Brand))
                    .col(string(Manual::Model))
                    .col(string_uniq(Manual::ModelKey))
                    .col(string_null(Manual::Category))
                    .col(text(Manual::Content))
                    .col(timestamp(Manual::CreatedAt))
                    .col(timestamp(Manual::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Manual::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Manual {
    Table,
    Id,
    Title,
    Brand,
    Model,
    ModelKey,
    Category,
    Content,
    CreatedAt,
    UpdatedAt,
}
