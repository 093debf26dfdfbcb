use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub equipment_name: Option<String>,
    pub equipment_model: String,
    pub equipment_model_key: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub defect_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub technician_notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub diagnosis: Option<String>,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
