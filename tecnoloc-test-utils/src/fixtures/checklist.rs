//! Stored checklist templates.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use serde_json::json;

use crate::{error::TestError, TestContext};

pub struct ChecklistFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> ChecklistFixtures<'a> {
    /// Insert an imported template with one section of two items, the first one critical.
    pub async fn insert_mock_template(
        &self,
        id: &str,
        equipment_type: &str,
    ) -> Result<entity::checklist_template::Model, TestError> {
        let sections = json!([{
            "title": "Itens Gerais Identificados",
            "category": null,
            "items": [
                { "id": "item_1", "label": "Verificação de Estado Geral", "critical": true },
                { "id": "item_2", "label": "Teste de Funcionamento", "critical": false }
            ]
        }]);

        let template = entity::checklist_template::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            name: ActiveValue::Set(format!("Checklist {}", id)),
            equipment_type: ActiveValue::Set(equipment_type.to_string()),
            sections: ActiveValue::Set(serde_json::to_string(&sections)?),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(template.insert(&self.setup.db).await?)
    }
}
