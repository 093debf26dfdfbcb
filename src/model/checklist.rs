use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Torre,
    Gerador,
    MaquinaSolda,
    Outro,
    /// Template generated from an uploaded document
    Custom,
}

impl EquipmentType {
    /// Types a technician can pick when starting a checklist.
    pub const SELECTABLE: [EquipmentType; 4] = [
        EquipmentType::Torre,
        EquipmentType::Gerador,
        EquipmentType::MaquinaSolda,
        EquipmentType::Outro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Torre => "torre",
            Self::Gerador => "gerador",
            Self::MaquinaSolda => "maquina_solda",
            Self::Outro => "outro",
            Self::Custom => "custom",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        match value {
            "torre" => Some(Self::Torre),
            "gerador" => Some(Self::Gerador),
            "maquina_solda" => Some(Self::MaquinaSolda),
            "outro" => Some(Self::Outro),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Torre => "Torre de Iluminação",
            Self::Gerador => "Gerador",
            Self::MaquinaSolda => "Máquina de Solda",
            Self::Outro => "Outro",
            Self::Custom => "Modelo Importado",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChecklistTemplateDto {
    pub id: String,
    pub name: String,
    pub equipment_type: EquipmentType,
    pub sections: Vec<ChecklistSection>,
    /// Shipped with the application rather than stored in the database
    #[serde(default)]
    pub built_in: bool,
}

impl ChecklistTemplateDto {
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn total_items(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChecklistSection {
    pub title: String,
    /// `preventiva`, `funcionamento`, `limpeza`, `pintura`, or `carenagem`
    #[serde(default)]
    pub category: Option<String>,
    pub items: Vec<ChecklistItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub critical: bool,
}

/// Request to derive a template from an uploaded inspection document.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ImportTemplateDto {
    pub file_name: String,
}

/// Finalised checklist run submitted by the technician.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChecklistReportDto {
    pub template_id: String,
    #[serde(default)]
    pub equipment_name: Option<String>,
    pub patrimonio: String,
    #[serde(default)]
    pub horimetro: Option<String>,
    pub technician_name: String,
    #[serde(default)]
    pub supervisor_email: Option<String>,
    #[serde(default)]
    pub observation: Option<String>,
    /// Ids of the items marked as checked
    #[serde(default)]
    pub checked_items: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChecklistReportReceiptDto {
    pub id: i32,
    pub template_id: String,
    pub checked_items: usize,
    pub total_items: usize,
    pub supervisor_email: Option<String>,
    pub created_at: NaiveDateTime,
}
