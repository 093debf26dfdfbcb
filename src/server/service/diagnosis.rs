use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    diagnosis::{build_prompt, format_past_cases, parse_diagnosis, validate_form, PastCase},
    model::diagnosis::{Diagnosis, DiagnosisRequestDto},
    server::{
        ai::gemini::GeminiClient,
        data::{maintenance_log::MaintenanceLogRepository, manual::ManualRepository},
        error::{diagnosis::DiagnosisError, Error},
        service::diagnose::parse_image,
    },
};

/// Number of resolved cases from the maintenance history included in the prompt.
pub const PAST_CASE_LIMIT: u64 = 3;

/// Context gathered for a diagnosis prompt.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiagnosisContext {
    /// Content of the manual for the equipment model
    pub manual: Option<String>,
    /// Formatted resolved cases for the equipment model
    pub past_cases: Option<String>,
}

/// Runs the diagnosis pipeline for a defect report.
pub struct DiagnosisService<'a> {
    db: &'a DatabaseConnection,
    ai_client: &'a GeminiClient,
}

impl<'a> DiagnosisService<'a> {
    /// Creates a new instance of [`DiagnosisService`]
    pub fn new(db: &'a DatabaseConnection, ai_client: &'a GeminiClient) -> Self {
        Self { db, ai_client }
    }

    /// Looks up the manual and the resolved history for a model concurrently.
    ///
    /// Either lookup failing only removes that piece of context; the failure is logged.
    pub async fn gather_context(&self, model: &str) -> DiagnosisContext {
        if model.trim().is_empty() {
            return DiagnosisContext::default();
        }

        let manual_repo = ManualRepository::new(self.db);
        let log_repo = MaintenanceLogRepository::new(self.db);

        let (manual, logs) = tokio::join!(
            manual_repo.find_by_model(model),
            log_repo.find_resolved_by_model(model, PAST_CASE_LIMIT)
        );

        let manual = match manual {
            Ok(manual) => manual
                .map(|m| m.content)
                .filter(|content| !content.trim().is_empty()),
            Err(e) => {
                tracing::warn!(model = %model, "Failed to look up manual for diagnosis: {}", e);
                None
            }
        };

        let past_cases = match logs {
            Ok(logs) => {
                let cases: Vec<PastCase> = logs
                    .iter()
                    .map(|log| PastCase {
                        defect: log.defect_description.as_deref().unwrap_or_default(),
                        resolution: log.technician_notes.as_deref().unwrap_or_default(),
                    })
                    .collect();

                format_past_cases(&cases)
            }
            Err(e) => {
                tracing::warn!(model = %model, "Failed to look up maintenance history for diagnosis: {}", e);
                None
            }
        };

        DiagnosisContext { manual, past_cases }
    }

    /// Validates the report, builds the prompt with its context and parses the model's answer.
    ///
    /// # Returns
    /// - `Ok(Diagnosis)` - Causes and solutions proposed by the model
    /// - `Err(Error::DiagnosisError)` - Incomplete form, invalid image, or unparseable answer
    /// - `Err(Error::AiError)` - The provider failed or returned no answer
    pub async fn diagnose(&self, form: &DiagnosisRequestDto) -> Result<Diagnosis, Error> {
        validate_form(form).map_err(DiagnosisError::from)?;
        let image = parse_image(form.image.as_deref())?;

        let context = self.gather_context(&form.model).await;
        let prompt = build_prompt(form, context.manual.as_deref(), context.past_cases.as_deref());

        let text = self
            .ai_client
            .generate_content(&prompt, image.as_ref())
            .await?;

        let diagnosis = parse_diagnosis(&text).map_err(DiagnosisError::from)?;

        Ok(diagnosis)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tecnoloc_test_utils::prelude::*;

    use super::*;
    use crate::server::util::test::TestContextExt;

    fn form() -> DiagnosisRequestDto {
        DiagnosisRequestDto {
            equipment_name: "Torre de Iluminação".to_string(),
            brand: "Generac".to_string(),
            model: "MLT6SKD".to_string(),
            defect_description: "Motor não liga".to_string(),
            image: None,
        }
    }

    fn fenced_answer() -> String {
        let diagnosis = json!({
            "possible_causes": ["Bateria descarregada"],
            "solutions": [{
                "title": "Carregar bateria",
                "steps": ["Conectar carregador"],
                "difficulty": "fácil",
                "estimated_time": "30 min",
                "tools_needed": ["Carregador"],
                "warnings": []
            }]
        });

        format!("Aqui está:\n```json\n{}\n```", diagnosis)
    }

    mod gather_context {
        use super::*;

        /// Expect the manual and at most three resolved cases for the model
        #[tokio::test]
        async fn collects_manual_and_resolved_cases() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_tables()
                .with_mock_manual("MLT6SKD", "Verifique o relé de partida.")
                .with_mock_maintenance_log("MLT6SKD", "d1", "s1", true)
                .with_mock_maintenance_log("MLT6SKD", "d2", "s2", false)
                .with_mock_maintenance_log("MLT6SKD", "d3", "s3", true)
                .with_mock_maintenance_log("MLT6SKD", "d4", "s4", true)
                .with_mock_maintenance_log("MLT6SKD", "d5", "s5", true)
                .build()
                .await?;

            let ai_client = test.ai_client();
            let context = DiagnosisService::new(&test.db, &ai_client)
                .gather_context("mlt6skd")
                .await;

            assert_eq!(context.manual.as_deref(), Some("Verifique o relé de partida."));
            let past_cases = context.past_cases.unwrap();
            assert_eq!(past_cases.lines().count(), 3);
            assert!(past_cases.starts_with("   CASO 1: O defeito era \"d5\""));
            assert!(!past_cases.contains("d2"));

            Ok(())
        }

        /// Expect no context, rather than an error, when the lookups fail
        #[tokio::test]
        async fn degrades_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let ai_client = test.ai_client();
            let context = DiagnosisService::new(&test.db, &ai_client)
                .gather_context("MLT6SKD")
                .await;

            assert_eq!(context, DiagnosisContext::default());

            Ok(())
        }
    }

    mod diagnose {
        use super::*;

        /// Expect fenced JSON from the model to parse into causes and solutions
        #[tokio::test]
        async fn parses_fenced_answer() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_tables()
                .with_generate_content_endpoint(fenced_answer(), 1)
                .build()
                .await?;

            let ai_client = test.ai_client();
            let diagnosis = DiagnosisService::new(&test.db, &ai_client)
                .diagnose(&form())
                .await
                .unwrap();

            assert_eq!(diagnosis.possible_causes, vec!["Bateria descarregada"]);
            assert_eq!(diagnosis.solutions[0].difficulty, "fácil");
            test.assert_mocks();

            Ok(())
        }

        /// Expect the manual content to be part of the prompt sent to the model
        #[tokio::test]
        async fn includes_manual_in_prompt() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_knowledge_tables()
                .with_mock_manual("MLT6SKD", "Verifique o rele de partida")
                .build()
                .await?;
            let mock = test.ai().create_generate_content_endpoint_matching(
                "Verifique o rele de partida",
                &fenced_answer(),
                1,
            );

            let ai_client = test.ai_client();
            let result = DiagnosisService::new(&test.db, &ai_client)
                .diagnose(&form())
                .await;

            assert!(result.is_ok());
            mock.assert();

            Ok(())
        }

        /// Expect IncompleteForm without calling the model
        #[tokio::test]
        async fn rejects_incomplete_form() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_tables()
                .with_generate_content_endpoint(fenced_answer(), 0)
                .build()
                .await?;

            let incomplete = DiagnosisRequestDto {
                defect_description: String::new(),
                ..form()
            };
            let ai_client = test.ai_client();
            let result = DiagnosisService::new(&test.db, &ai_client)
                .diagnose(&incomplete)
                .await;

            assert!(matches!(
                result,
                Err(Error::DiagnosisError(DiagnosisError::IncompleteForm(_)))
            ));
            test.assert_mocks();

            Ok(())
        }

        /// Expect Parse error when the model does not answer with JSON
        #[tokio::test]
        async fn fails_on_prose_answer() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_tables()
                .with_generate_content_endpoint("Não consegui analisar o equipamento.", 1)
                .build()
                .await?;

            let ai_client = test.ai_client();
            let result = DiagnosisService::new(&test.db, &ai_client)
                .diagnose(&form())
                .await;

            assert!(matches!(
                result,
                Err(Error::DiagnosisError(DiagnosisError::Parse(_)))
            ));

            Ok(())
        }
    }
}
