use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ManualDto {
    pub id: i32,
    pub title: String,
    pub brand: String,
    pub model: String,
    /// `eletrico` or `mecanico`
    pub category: Option<String>,
    pub content: String,
    pub updated_at: NaiveDateTime,
}

impl ManualDto {
    /// Case-insensitive substring match against title, brand, and model.
    ///
    /// An empty (or whitespace only) term matches every manual.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&term)
            || self.brand.to_lowercase().contains(&term)
            || self.model.to_lowercase().contains(&term)
    }
}

/// Filters manuals by search term, preserving their order.
pub fn filter_manuals<'a>(manuals: &'a [ManualDto], term: &str) -> Vec<&'a ManualDto> {
    manuals.iter().filter(|m| m.matches(term)).collect()
}

/// Request to create a manual or replace the one stored for the same model.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SaveManualDto {
    pub title: String,
    #[serde(default)]
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: String,
    /// Replace the existing manual for this model instead of failing with a conflict
    #[serde(default)]
    pub overwrite: bool,
}
