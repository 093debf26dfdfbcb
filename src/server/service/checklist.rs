use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    checklist::{
        built_in_templates, find_built_in, template_from_upload, templates_for, validate_report,
        ReportError,
    },
    model::checklist::{
        ChecklistReportDto, ChecklistReportReceiptDto, ChecklistTemplateDto, EquipmentType,
    },
    server::{
        data::{
            checklist_report::ChecklistReportRepository,
            checklist_template::ChecklistTemplateRepository,
        },
        error::{checklist::ChecklistError, Error},
        model::db::ChecklistTemplateModel,
    },
};

/// Checklist templates (built-in and imported) and finalised reports.
pub struct ChecklistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChecklistService<'a> {
    /// Creates a new instance of [`ChecklistService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Built-in templates followed by imported ones, optionally for one equipment type.
    ///
    /// `equipment_type` is the key used in the API, e.g. `torre` or `maquina_solda`.
    pub async fn list_templates(
        &self,
        equipment_type: Option<&str>,
    ) -> Result<Vec<ChecklistTemplateDto>, Error> {
        let equipment_type = match equipment_type.map(str::trim).filter(|t| !t.is_empty()) {
            Some(key) => Some(
                EquipmentType::from_key(key)
                    .ok_or_else(|| ChecklistError::UnknownEquipmentType(key.to_string()))?,
            ),
            None => None,
        };

        let stored = ChecklistTemplateRepository::new(self.db)
            .list(equipment_type.as_ref().map(EquipmentType::as_str))
            .await?;

        let mut templates = templates_for(built_in_templates(), equipment_type);
        for template in stored {
            templates.push(template_to_dto(template)?);
        }

        Ok(templates)
    }

    /// A built-in or imported template by id
    pub async fn get_template(&self, template_id: &str) -> Result<ChecklistTemplateDto, Error> {
        if let Some(template) = find_built_in(template_id) {
            return Ok(template);
        }

        let template = ChecklistTemplateRepository::new(self.db)
            .get_by_id(template_id)
            .await?
            .ok_or_else(|| ChecklistError::TemplateNotFound(template_id.to_string()))?;

        template_to_dto(template)
    }

    /// Derives a template from an uploaded document's file name and stores it.
    pub async fn import_template(&self, file_name: &str) -> Result<ChecklistTemplateDto, Error> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(ChecklistError::MissingFileName.into());
        }

        let template_repo = ChecklistTemplateRepository::new(self.db);

        // Ids carry the import time in millis; step past any id already taken
        let mut stamp = Utc::now().timestamp_millis();
        let template = loop {
            let template = template_from_upload(file_name, stamp);
            if template_repo.get_by_id(&template.id).await?.is_none() {
                break template;
            }
            stamp += 1;
        };

        template_repo
            .create(
                &template.id,
                &template.name,
                template.equipment_type.as_str(),
                serde_json::to_string(&template.sections)?,
            )
            .await?;

        tracing::info!(
            template_id = %template.id,
            items = template.total_items(),
            "Imported checklist template from {}",
            file_name
        );

        Ok(template)
    }

    /// Deletes an imported template; built-in templates cannot be deleted.
    pub async fn delete_template(&self, template_id: &str) -> Result<(), Error> {
        if find_built_in(template_id).is_some() {
            return Err(ChecklistError::BuiltIn(template_id.to_string()).into());
        }

        let result = ChecklistTemplateRepository::new(self.db)
            .delete(template_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ChecklistError::TemplateNotFound(template_id.to_string()).into());
        }

        Ok(())
    }

    /// Validates and stores a finalised checklist run.
    ///
    /// The report is addressed to the supervisor e-mail when one is given; sending it is left
    /// to the mail integration, here the dispatch target is only logged.
    ///
    /// # Returns
    /// - `Ok(ChecklistReportReceiptDto)` - Stored report summary
    /// - `Err(Error::ChecklistError(Report))` - Required field missing, invalid e-mail, or an
    ///   item that is unknown or checked twice
    /// - `Err(Error::ChecklistError(TemplateNotFound))` - Unknown template id
    pub async fn submit_report(
        &self,
        report: &ChecklistReportDto,
    ) -> Result<ChecklistReportReceiptDto, Error> {
        if report.template_id.trim().is_empty() {
            return Err(ChecklistError::Report(ReportError::MissingField("Checklist")).into());
        }

        let template = self.get_template(&report.template_id).await?;
        validate_report(report, &template).map_err(ChecklistError::from)?;

        let total_items = template.total_items();
        let stored = ChecklistReportRepository::new(self.db)
            .create(
                report,
                serde_json::to_string(&report.checked_items)?,
                total_items as i32,
            )
            .await?;

        match &stored.supervisor_email {
            Some(email) => tracing::info!(
                report_id = %stored.id,
                patrimonio = %stored.patrimonio,
                "Checklist report ready to send to {}",
                email
            ),
            None => tracing::info!(
                report_id = %stored.id,
                patrimonio = %stored.patrimonio,
                "Checklist report stored without supervisor e-mail"
            ),
        }

        Ok(ChecklistReportReceiptDto {
            id: stored.id,
            template_id: stored.template_id,
            checked_items: report.checked_items.len(),
            total_items,
            supervisor_email: stored.supervisor_email,
            created_at: stored.created_at,
        })
    }
}

fn template_to_dto(template: ChecklistTemplateModel) -> Result<ChecklistTemplateDto, Error> {
    Ok(ChecklistTemplateDto {
        sections: serde_json::from_str(&template.sections)?,
        equipment_type: EquipmentType::from_key(&template.equipment_type)
            .unwrap_or(EquipmentType::Custom),
        id: template.id,
        name: template.name,
        built_in: false,
    })
}
