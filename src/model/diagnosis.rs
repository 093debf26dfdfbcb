use serde::{Deserialize, Serialize};

/// Body of the proxy endpoint `POST /api/diagnose`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DiagnoseRequestDto {
    /// Full prompt forwarded to the model
    pub prompt: String,
    /// Base64 image (bare or as a `data:` URL)
    #[serde(default)]
    pub image: Option<String>,
}

/// Successful response of the proxy endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DiagnoseResponseDto {
    /// Raw text produced by the model
    pub result: String,
}

/// Defect report submitted from the diagnosis form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DiagnosisRequestDto {
    pub equipment_name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub defect_description: String,
    /// Photo of the defect, base64 encoded
    #[serde(default)]
    pub image: Option<String>,
}

/// Structured diagnosis returned by the model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Diagnosis {
    #[serde(default)]
    pub possible_causes: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<Solution>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Solution {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    /// `fácil`, `média` or `difícil`
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default)]
    pub tools_needed: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}
