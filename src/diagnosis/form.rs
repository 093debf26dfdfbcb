use thiserror::Error;

use crate::model::diagnosis::DiagnosisRequestDto;

/// The diagnosis form is missing the equipment name, or has neither a defect description nor
/// a photo.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Preencha os dados e descreva o defeito ou envie uma foto.")]
pub struct IncompleteForm;

/// Checks the minimum a technician must provide before a diagnosis is requested.
pub fn validate_form(form: &DiagnosisRequestDto) -> Result<(), IncompleteForm> {
    let has_image = form
        .image
        .as_deref()
        .is_some_and(|image| !image.trim().is_empty());
    let has_description = !form.defect_description.trim().is_empty();

    if form.equipment_name.trim().is_empty() || (!has_description && !has_image) {
        return Err(IncompleteForm);
    }

    Ok(())
}
