use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::manual::SaveManualDto, server::data::normalize_model_key};

pub struct ManualRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManualRepository<'a> {
    /// Creates a new instance of [`ManualRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new manual
    pub async fn create(&self, manual: &SaveManualDto) -> Result<entity::manual::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let manual = entity::manual::ActiveModel {
            title: ActiveValue::Set(manual.title.trim().to_string()),
            brand: ActiveValue::Set(manual.brand.trim().to_string()),
            model: ActiveValue::Set(manual.model.trim().to_string()),
            model_key: ActiveValue::Set(normalize_model_key(&manual.model)),
            category: ActiveValue::Set(manual.category.clone()),
            content: ActiveValue::Set(manual.content.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        manual.insert(self.db).await
    }

    /// Replaces the title, brand, category and content of an existing manual
    pub async fn update(
        &self,
        existing: entity::manual::Model,
        manual: &SaveManualDto,
    ) -> Result<entity::manual::Model, DbErr> {
        let mut manual_am = existing.into_active_model();
        manual_am.title = ActiveValue::Set(manual.title.trim().to_string());
        manual_am.brand = ActiveValue::Set(manual.brand.trim().to_string());
        manual_am.category = ActiveValue::Set(manual.category.clone());
        manual_am.content = ActiveValue::Set(manual.content.clone());
        manual_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        manual_am.update(self.db).await
    }

    /// Finds the manual for an equipment model, ignoring case and surrounding whitespace
    pub async fn find_by_model(&self, model: &str) -> Result<Option<entity::manual::Model>, DbErr> {
        entity::prelude::Manual::find()
            .filter(entity::manual::Column::ModelKey.eq(normalize_model_key(model)))
            .one(self.db)
            .await
    }

    /// All manuals, most recently updated first
    pub async fn list_recent(&self) -> Result<Vec<entity::manual::Model>, DbErr> {
        entity::prelude::Manual::find()
            .order_by_desc(entity::manual::Column::UpdatedAt)
            .order_by_desc(entity::manual::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a manual
    ///
    /// Returns OK regardless of the manual existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, manual_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Manual::delete_by_id(manual_id)
            .exec(self.db)
            .await
    }
}
