use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "checklist_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_id: String,
    pub equipment_name: Option<String>,
    pub patrimonio: String,
    pub horimetro: Option<String>,
    pub technician_name: String,
    pub supervisor_email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub observation: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub checked_items: String,
    pub total_items: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
