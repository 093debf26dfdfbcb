//! Tests for the `POST /api/diagnosis` endpoint.

use tecnoloc::{
    model::diagnosis::{Diagnosis, DiagnosisRequestDto},
    server::controller::diagnosis::diagnose_defect,
};

use super::*;

const DIAGNOSIS_TEXT: &str = r#"```json
{
  "possible_causes": ["Filtro de combustível saturado"],
  "solutions": [
    {
      "title": "Trocar filtro de combustível",
      "steps": ["Fechar registro", "Substituir filtro", "Sangrar o sistema"],
      "difficulty": "fácil",
      "estimated_time": "20 min",
      "tools_needed": ["Chave de filtro"],
      "warnings": ["Motor frio"]
    }
  ]
}
```"#;

fn form(model: &str, description: &str) -> DiagnosisRequestDto {
    DiagnosisRequestDto {
        equipment_name: "Torre de Iluminação".to_string(),
        brand: "Generac".to_string(),
        model: model.to_string(),
        defect_description: description.to_string(),
        image: None,
    }
}

/// Expect 200 with the parsed diagnosis once the fences are stripped
#[tokio::test]
async fn returns_parsed_diagnosis() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_tables()
        .with_generate_content_endpoint(DIAGNOSIS_TEXT, 1)
        .build()
        .await?;

    let resp = diagnose_defect(
        State(test.into_app_state()),
        Ok(Json(form("MLT6SKD", "Motor morre após 5 minutos"))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let diagnosis: Diagnosis = body_json(resp).await;
    assert_eq!(diagnosis.possible_causes, vec!["Filtro de combustível saturado"]);
    assert_eq!(diagnosis.solutions.len(), 1);
    assert_eq!(diagnosis.solutions[0].difficulty, "fácil");
    test.assert_mocks();

    Ok(())
}

/// Expect the stored manual and past fixes to reach the prompt
#[tokio::test]
async fn grounds_prompt_in_knowledge_base() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_tables()
        .with_mock_manual("MLT6SKD", "Trocar o filtro a cada 250 horas")
        .with_mock_maintenance_log("MLT6SKD", "Motor morrendo", "Troca do filtro resolveu", true)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", mockito::Matcher::Any)
                .match_body(mockito::Matcher::AllOf(vec![
                    mockito::Matcher::Regex("Trocar o filtro a cada 250 horas".to_string()),
                    mockito::Matcher::Regex("Troca do filtro resolveu".to_string()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    serde_json::json!({
                        "candidates": [{ "content": { "parts": [{ "text": DIAGNOSIS_TEXT }] } }]
                    })
                    .to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let resp = diagnose_defect(
        State(test.into_app_state()),
        Ok(Json(form("mlt6skd", "Motor morre após 5 minutos"))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 with the form prompt when there is neither a description nor a photo
#[tokio::test]
async fn rejects_incomplete_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_tables()
        .with_generate_content_endpoint(DIAGNOSIS_TEXT, 0)
        .build()
        .await?;

    let resp = diagnose_defect(State(test.into_app_state()), Ok(Json(form("MLT6SKD", " "))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(
        body.error,
        "Preencha os dados e descreva o defeito ou envie uma foto."
    );
    test.assert_mocks();

    Ok(())
}

/// Expect 502 when the model does not answer with diagnosis JSON
#[tokio::test]
async fn rejects_unparseable_answer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_tables()
        .with_generate_content_endpoint("Não consegui analisar o defeito.", 1)
        .build()
        .await?;

    let resp = diagnose_defect(
        State(test.into_app_state()),
        Ok(Json(form("MLT6SKD", "Motor morre após 5 minutos"))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}
