use thiserror::Error;

use crate::model::diagnosis::Diagnosis;

/// The model's text was not valid diagnosis JSON once the fences were removed.
#[derive(Error, Debug)]
#[error("Failed to parse diagnosis from model response: {0}")]
pub struct DiagnosisParseError(#[from] serde_json::Error);

/// Removes markdown code fences and any text around the outermost JSON object.
///
/// Every `` ```json `` and `` ``` `` marker is dropped and the result trimmed. If the remaining
/// text has a `{` followed later by a `}`, only the span from the first `{` to the last `}` is
/// kept.
pub fn strip_code_fences(text: &str) -> String {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => cleaned[start..=end].to_string(),
        _ => cleaned.to_string(),
    }
}

/// Strips fences and parses the model's text as a [`Diagnosis`].
pub fn parse_diagnosis(text: &str) -> Result<Diagnosis, DiagnosisParseError> {
    let json = strip_code_fences(text);

    Ok(serde_json::from_str(&json)?)
}
