use std::collections::HashSet;

use thiserror::Error;

use crate::model::checklist::{ChecklistReportDto, ChecklistTemplateDto};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Preencha os campos obrigatórios: {0}")]
    MissingField(&'static str),
    #[error("Por favor, preencha um e-mail válido para envio.")]
    InvalidEmail,
    #[error("Item {0} não pertence ao checklist")]
    UnknownItem(String),
    #[error("Item {0} marcado mais de uma vez")]
    DuplicateItem(String),
}

/// Validates a finalised checklist against the template it was filled from.
pub fn validate_report(
    report: &ChecklistReportDto,
    template: &ChecklistTemplateDto,
) -> Result<(), ReportError> {
    if report.patrimonio.trim().is_empty() {
        return Err(ReportError::MissingField("Patrimônio"));
    }
    if report.technician_name.trim().is_empty() {
        return Err(ReportError::MissingField("Nome do Técnico"));
    }

    if let Some(email) = report
        .supervisor_email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
    {
        if !email.contains('@') {
            return Err(ReportError::InvalidEmail);
        }
    }

    if let Some(unknown) = report
        .checked_items
        .iter()
        .find(|id| !template.items().any(|item| &item.id == *id))
    {
        return Err(ReportError::UnknownItem(unknown.clone()));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = report.checked_items.iter().find(|id| !seen.insert(*id)) {
        return Err(ReportError::DuplicateItem(duplicate.clone()));
    }

    Ok(())
}
