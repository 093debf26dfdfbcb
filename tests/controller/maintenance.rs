//! Tests for the maintenance log endpoints.

use tecnoloc::{
    model::{
        diagnosis::Diagnosis,
        maintenance::{LogStatus, MaintenanceLogDto, RecordFeedbackDto},
    },
    server::controller::maintenance::{list_maintenance_logs, record_feedback},
};

use super::*;

fn feedback(model: &str, was_effective: bool) -> RecordFeedbackDto {
    RecordFeedbackDto {
        equipment_model: model.to_string(),
        equipment_name: Some("Gerador".to_string()),
        defect_description: Some("Não dá partida".to_string()),
        technician_notes: Some("Bateria substituída".to_string()),
        diagnosis: Some(Diagnosis {
            possible_causes: vec!["Bateria descarregada".to_string()],
            solutions: Vec::new(),
        }),
        was_effective,
    }
}

mod record_feedback {
    use super::*;

    /// Expect 201 with a resolved log when the solution worked
    #[tokio::test]
    async fn stores_resolved_log() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;

        let resp = record_feedback(
            State(test.into_app_state()),
            Ok(Json(feedback("GSW 30", true))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let log: MaintenanceLogDto = body_json(resp).await;
        assert_eq!(log.status, LogStatus::Resolved);
        assert_eq!(log.equipment_model, "GSW 30");
        assert_eq!(
            log.diagnosis.map(|d| d.possible_causes),
            Some(vec!["Bateria descarregada".to_string()])
        );

        Ok(())
    }

    /// Expect a pending log when the solution did not work
    #[tokio::test]
    async fn stores_pending_log() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;

        let resp = record_feedback(
            State(test.into_app_state()),
            Ok(Json(feedback("GSW 30", false))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let log: MaintenanceLogDto = body_json(resp).await;
        assert_eq!(log.status, LogStatus::Pending);

        Ok(())
    }

    /// Expect 400 when the equipment model is blank
    #[tokio::test]
    async fn rejects_missing_model() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;

        let resp = record_feedback(State(test.into_app_state()), Ok(Json(feedback(" ", true))))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Informe o modelo do equipamento.");

        Ok(())
    }
}

mod list_maintenance_logs {
    use super::*;

    /// Expect 200 with an empty list when nothing was recorded
    #[tokio::test]
    async fn empty_history() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;

        let resp = list_maintenance_logs(State(test.into_app_state()))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let logs: Vec<MaintenanceLogDto> = body_json(resp).await;
        assert!(logs.is_empty());

        Ok(())
    }

    /// Expect logs newest first
    #[tokio::test]
    async fn newest_first() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_knowledge_tables()
            .with_mock_maintenance_log("MLT6SKD", "Motor morrendo", "Filtro trocado", true)
            .with_mock_maintenance_log("GSW 30", "Não dá partida", "Aguardando peça", false)
            .build()
            .await?;

        let resp = list_maintenance_logs(State(test.into_app_state()))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let logs: Vec<MaintenanceLogDto> = body_json(resp).await;
        let models: Vec<&str> = logs.iter().map(|l| l.equipment_model.as_str()).collect();
        assert_eq!(models, vec!["GSW 30", "MLT6SKD"]);
        assert_eq!(logs[0].status, LogStatus::Pending);

        Ok(())
    }
}
