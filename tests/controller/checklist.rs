//! Tests for the checklist template and report endpoints.

use axum::extract::{rejection::QueryRejection, Path, Query};
use tecnoloc::{
    model::checklist::{
        ChecklistReportDto, ChecklistReportReceiptDto, ChecklistTemplateDto, EquipmentType,
        ImportTemplateDto,
    },
    server::controller::checklist::{
        delete_template, import_template, list_templates, submit_report, TemplateFilterParams,
    },
};

use super::*;

fn filter(equipment_type: Option<&str>) -> Result<Query<TemplateFilterParams>, QueryRejection> {
    Ok(Query(TemplateFilterParams {
        equipment_type: equipment_type.map(str::to_string),
    }))
}

fn report(template_id: &str, checked_items: &[&str]) -> ChecklistReportDto {
    ChecklistReportDto {
        template_id: template_id.to_string(),
        equipment_name: Some("Torre MLT6SKD".to_string()),
        patrimonio: "TL-0042".to_string(),
        horimetro: Some("1520".to_string()),
        technician_name: "Marcos".to_string(),
        supervisor_email: Some("supervisor@tecnoloc.com.br".to_string()),
        observation: None,
        checked_items: checked_items.iter().map(|s| s.to_string()).collect(),
    }
}

mod list_templates {
    use super::*;

    /// Expect built-in templates followed by the stored ones
    #[tokio::test]
    async fn built_ins_then_stored() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_checklist_tables()
            .with_mock_checklist_template("custom-1", "custom")
            .build()
            .await?;

        let resp = list_templates(State(test.into_app_state()), filter(None))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let templates: Vec<ChecklistTemplateDto> = body_json(resp).await;
        let last = templates.last().expect("at least one template");
        assert_eq!(last.id, "custom-1");
        assert!(!last.built_in);
        assert!(templates.iter().any(|t| t.id == "gerador-padrao" && t.built_in));

        Ok(())
    }

    /// Expect only templates of the requested equipment type
    #[tokio::test]
    async fn filters_by_equipment_type() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_checklist_tables()
            .with_mock_checklist_template("custom-1", "custom")
            .build()
            .await?;

        let resp = list_templates(State(test.into_app_state()), filter(Some("torre")))
            .await
            .into_response();

        let templates: Vec<ChecklistTemplateDto> = body_json(resp).await;
        assert!(!templates.is_empty());
        assert!(templates
            .iter()
            .all(|t| t.equipment_type == EquipmentType::Torre));

        Ok(())
    }

    /// Expect 400 for an equipment type that does not exist
    #[tokio::test]
    async fn rejects_unknown_equipment_type() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let resp = list_templates(State(test.into_app_state()), filter(Some("compressor")))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod import_template {
    use super::*;

    /// Expect 201 and the imported template listed afterwards
    #[tokio::test]
    async fn imports_and_lists() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;
        let state = test.into_app_state();

        let resp = import_template(
            State(state.clone()),
            Ok(Json(ImportTemplateDto {
                file_name: "inspecao_compressor.pdf".to_string(),
            })),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let imported: ChecklistTemplateDto = body_json(resp).await;
        assert!(imported.id.starts_with("custom-"));
        assert_eq!(imported.equipment_type, EquipmentType::Custom);

        let resp = list_templates(State(state), filter(Some("custom")))
            .await
            .into_response();
        let templates: Vec<ChecklistTemplateDto> = body_json(resp).await;
        assert!(templates.iter().any(|t| t.id == imported.id));

        Ok(())
    }

    /// Expect two imports of the same document in a row to both succeed with distinct ids
    #[tokio::test]
    async fn repeated_import_gets_new_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;
        let state = test.into_app_state();

        let mut ids = Vec::new();
        for _ in 0..2 {
            let resp = import_template(
                State(state.clone()),
                Ok(Json(ImportTemplateDto {
                    file_name: "torre.pdf".to_string(),
                })),
            )
            .await
            .into_response();

            assert_eq!(resp.status(), StatusCode::CREATED);
            let imported: ChecklistTemplateDto = body_json(resp).await;
            ids.push(imported.id);
        }

        assert_ne!(ids[0], ids[1]);

        Ok(())
    }

    /// Expect 400 for a blank file name
    #[tokio::test]
    async fn rejects_blank_file_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let resp = import_template(
            State(test.into_app_state()),
            Ok(Json(ImportTemplateDto {
                file_name: "  ".to_string(),
            })),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod delete_template {
    use super::*;

    /// Expect 204 for a stored template
    #[tokio::test]
    async fn deletes_stored_template() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_checklist_tables()
            .with_mock_checklist_template("custom-1", "custom")
            .build()
            .await?;

        let resp = delete_template(
            State(test.into_app_state()),
            Ok(Path("custom-1".to_string())),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }

    /// Expect 400 for a built-in template
    #[tokio::test]
    async fn refuses_built_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let resp = delete_template(
            State(test.into_app_state()),
            Ok(Path("gerador-padrao".to_string())),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 404 for an unknown template
    #[tokio::test]
    async fn unknown_template() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let resp = delete_template(
            State(test.into_app_state()),
            Ok(Path("custom-9".to_string())),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod submit_report {
    use super::*;

    /// Expect 201 with the checked and total item counts
    #[tokio::test]
    async fn stores_report() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_checklist_tables()
            .with_mock_checklist_template("custom-1", "custom")
            .build()
            .await?;

        let resp = submit_report(
            State(test.into_app_state()),
            Ok(Json(report("custom-1", &["item_1"]))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let receipt: ChecklistReportReceiptDto = body_json(resp).await;
        assert_eq!(receipt.template_id, "custom-1");
        assert_eq!(receipt.checked_items, 1);
        assert_eq!(receipt.total_items, 2);
        assert_eq!(
            receipt.supervisor_email.as_deref(),
            Some("supervisor@tecnoloc.com.br")
        );

        Ok(())
    }

    /// Expect 400 naming the missing field
    #[tokio::test]
    async fn rejects_missing_patrimonio() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let mut request = report("gerador-padrao", &["oleo"]);
        request.patrimonio = String::new();

        let resp = submit_report(State(test.into_app_state()), Ok(Json(request)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Preencha os campos obrigatórios: Patrimônio");

        Ok(())
    }

    /// Expect 400 for a supervisor e-mail without `@`
    #[tokio::test]
    async fn rejects_invalid_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let mut request = report("gerador-padrao", &["oleo"]);
        request.supervisor_email = Some("supervisor".to_string());

        let resp = submit_report(State(test.into_app_state()), Ok(Json(request)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Por favor, preencha um e-mail válido para envio.");

        Ok(())
    }

    /// Expect 400 when the same item is sent twice
    #[tokio::test]
    async fn rejects_repeated_item() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let resp = submit_report(
            State(test.into_app_state()),
            Ok(Json(report("gerador-padrao", &["oleo", "oleo"]))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Item oleo marcado mais de uma vez");

        Ok(())
    }

    /// Expect 404 when the template does not exist
    #[tokio::test]
    async fn unknown_template() -> Result<(), TestError> {
        let test = TestBuilder::new().with_checklist_tables().build().await?;

        let resp = submit_report(
            State(test.into_app_state()),
            Ok(Json(report("custom-9", &[]))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
