use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct ChecklistTemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChecklistTemplateRepository<'a> {
    /// Creates a new instance of [`ChecklistTemplateRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an imported template; `sections` is the JSON encoded section list
    pub async fn create(
        &self,
        template_id: &str,
        name: &str,
        equipment_type: &str,
        sections: String,
    ) -> Result<entity::checklist_template::Model, DbErr> {
        let template = entity::checklist_template::ActiveModel {
            id: ActiveValue::Set(template_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            equipment_type: ActiveValue::Set(equipment_type.to_string()),
            sections: ActiveValue::Set(sections),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        template.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        template_id: &str,
    ) -> Result<Option<entity::checklist_template::Model>, DbErr> {
        entity::prelude::ChecklistTemplate::find_by_id(template_id.to_string())
            .one(self.db)
            .await
    }

    /// Stored templates, oldest first, optionally limited to one equipment type
    pub async fn list(
        &self,
        equipment_type: Option<&str>,
    ) -> Result<Vec<entity::checklist_template::Model>, DbErr> {
        let mut query = entity::prelude::ChecklistTemplate::find();

        if let Some(equipment_type) = equipment_type {
            query = query
                .filter(entity::checklist_template::Column::EquipmentType.eq(equipment_type));
        }

        query
            .order_by_asc(entity::checklist_template::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Deletes a template
    ///
    /// Returns OK regardless of the template existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, template_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::ChecklistTemplate::delete_by_id(template_id.to_string())
            .exec(self.db)
            .await
    }
}
