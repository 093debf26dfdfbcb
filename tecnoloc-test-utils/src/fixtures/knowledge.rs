//! Manuals and maintenance logs.
//!
//! Model keys are normalised the same way the server does (trimmed, lower-cased) so the
//! fixtures are found by the repository lookups.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

pub struct KnowledgeFixtures<'a> {
    pub setup: &'a TestContext,
}

fn model_key(model: &str) -> String {
    model.trim().to_lowercase()
}

impl<'a> KnowledgeFixtures<'a> {
    /// Insert a manual for `model` with the given content.
    pub async fn insert_mock_manual(
        &self,
        model: &str,
        content: &str,
    ) -> Result<entity::manual::Model, TestError> {
        let now = Utc::now().naive_utc();

        let manual = entity::manual::ActiveModel {
            title: ActiveValue::Set(format!("Manual {}", model)),
            brand: ActiveValue::Set("Generac".to_string()),
            model: ActiveValue::Set(model.to_string()),
            model_key: ActiveValue::Set(model_key(model)),
            category: ActiveValue::Set(Some("mecanico".to_string())),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(manual.insert(&self.setup.db).await?)
    }

    /// Insert a maintenance log for `model`, `Resolvido` when `resolved` else `Pendente`.
    pub async fn insert_mock_maintenance_log(
        &self,
        model: &str,
        defect: &str,
        notes: &str,
        resolved: bool,
    ) -> Result<entity::maintenance_log::Model, TestError> {
        let status = if resolved { "Resolvido" } else { "Pendente" };

        let log = entity::maintenance_log::ActiveModel {
            equipment_name: ActiveValue::Set(Some("Torre de Iluminação".to_string())),
            equipment_model: ActiveValue::Set(model.to_string()),
            equipment_model_key: ActiveValue::Set(model_key(model)),
            defect_description: ActiveValue::Set(Some(defect.to_string())),
            technician_notes: ActiveValue::Set(Some(notes.to_string())),
            diagnosis: ActiveValue::Set(None),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(log.insert(&self.setup.db).await?)
    }
}
