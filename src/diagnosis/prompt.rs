use crate::model::diagnosis::DiagnosisRequestDto;

/// Placeholder used when no manual is stored for the equipment model.
pub const MANUAL_UNAVAILABLE: &str = "NÃO DISPONÍVEL NA BASE.";

/// Placeholder used when no resolved maintenance log exists for the equipment model.
pub const NO_PAST_CASES: &str = "Nenhum histórico relevante encontrado.";

const RESPONSE_INSTRUCTIONS: &str = r#"INSTRUÇÕES:
Analise a imagem e o relato. Retorne APENAS JSON no formato:
{
  "possible_causes": ["causa 1", "causa 2"],
  "solutions": [
    {
      "title": "Ação Recomendada",
      "steps": ["passo 1", "passo 2"],
      "difficulty": "fácil/média/difícil",
      "estimated_time": "30 min",
      "tools_needed": ["ferramenta"],
      "warnings": ["cuidado"]
    }
  ]
}"#;

/// A resolved defect from the maintenance history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PastCase<'a> {
    pub defect: &'a str,
    pub resolution: &'a str,
}

/// Formats past cases as numbered lines, or `None` when there are none.
pub fn format_past_cases(cases: &[PastCase<'_>]) -> Option<String> {
    if cases.is_empty() {
        return None;
    }

    let lines: Vec<String> = cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            format!(
                "   CASO {}: O defeito era \"{}\" e a solução foi: \"{}\"",
                i + 1,
                case.defect,
                case.resolution
            )
        })
        .collect();

    Some(lines.join("\n"))
}

/// Builds the prompt sent to the model.
///
/// The manual text is the theory the model should rely on, the past cases are fixes that
/// technicians confirmed in the field. Either may be missing.
pub fn build_prompt(
    form: &DiagnosisRequestDto,
    manual: Option<&str>,
    past_cases: Option<&str>,
) -> String {
    let manual = manual
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(MANUAL_UNAVAILABLE);
    let past_cases = past_cases.unwrap_or(NO_PAST_CASES);

    format!(
        "VOCÊ É UM ASSISTENTE TÉCNICO EXPERT DA TECNOLOC.\n\
         \n\
         CONTEXTO ATUAL:\n\
         - Equipamento: {name} ({brand} - {model})\n\
         - Relato do Problema: \"{defect}\"\n\
         \n\
         SUAS FONTES DE CONHECIMENTO:\n\
         --- FONTE 1: MANUAL TÉCNICO OFICIAL ---\n\
         {manual}\n\
         \n\
         --- FONTE 2: MEMÓRIA COLETIVA ---\n\
         {past_cases}\n\
         \n\
         {instructions}\n",
        name = form.equipment_name,
        brand = form.brand,
        model = form.model,
        defect = form.defect_description,
        instructions = RESPONSE_INSTRUCTIONS,
    )
}
