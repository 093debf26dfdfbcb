use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::diagnosis::Diagnosis;

/// Outcome recorded for a maintenance log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum LogStatus {
    #[serde(rename = "Resolvido")]
    Resolved,
    #[serde(rename = "Pendente")]
    Pending,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "Resolvido",
            Self::Pending => "Pendente",
        }
    }

    /// Parses a stored status, treating anything unknown as pending.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "Resolvido" => Self::Resolved,
            _ => Self::Pending,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MaintenanceLogDto {
    pub id: i32,
    pub equipment_name: Option<String>,
    pub equipment_model: String,
    pub defect_description: Option<String>,
    pub technician_notes: Option<String>,
    pub diagnosis: Option<Diagnosis>,
    pub status: LogStatus,
    pub created_at: NaiveDateTime,
}

/// Technician feedback on a diagnosis, stored as a maintenance log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecordFeedbackDto {
    pub equipment_model: String,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub defect_description: Option<String>,
    /// What actually fixed the equipment
    #[serde(default)]
    pub technician_notes: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<Diagnosis>,
    pub was_effective: bool,
}
