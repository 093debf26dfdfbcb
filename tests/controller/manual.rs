//! Tests for the manual library endpoints.

use axum::extract::{Path, Query};
use tecnoloc::{
    model::manual::{ManualDto, SaveManualDto},
    server::controller::manual::{
        delete_manual, list_manuals, lookup_manual, save_manual, ManualLookupParams,
        ManualSearchParams,
    },
};

use super::*;

fn manual(model: &str, content: &str, overwrite: bool) -> SaveManualDto {
    SaveManualDto {
        title: format!("Manual {}", model),
        brand: "Perkins".to_string(),
        model: model.to_string(),
        category: Some("mecanico".to_string()),
        content: content.to_string(),
        overwrite,
    }
}

mod save_manual {
    use super::*;

    /// Expect 201 for a model that has no manual yet
    #[tokio::test]
    async fn creates_manual() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;

        let resp = save_manual(
            State(test.into_app_state()),
            Ok(Json(manual("404D-22G", "Folga de válvulas 0,20 mm", false))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let saved: ManualDto = body_json(resp).await;
        assert_eq!(saved.model, "404D-22G");
        assert_eq!(saved.content, "Folga de válvulas 0,20 mm");

        Ok(())
    }

    /// Expect 409 naming the model when it already has a manual and overwrite is not set
    #[tokio::test]
    async fn conflicts_without_overwrite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_knowledge_tables()
            .with_mock_manual("404D-22G", "Conteúdo original")
            .build()
            .await?;

        let resp = save_manual(
            State(test.into_app_state()),
            Ok(Json(manual("404d-22g", "Conteúdo novo", false))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "O modelo 404d-22g já existe.");

        Ok(())
    }

    /// Expect 200 and the content replaced when overwrite is confirmed
    #[tokio::test]
    async fn overwrites_when_confirmed() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_knowledge_tables()
            .with_mock_manual("404D-22G", "Conteúdo original")
            .build()
            .await?;
        let state = test.into_app_state();

        let resp = save_manual(
            State(state.clone()),
            Ok(Json(manual("404D-22G", "Conteúdo novo", true))),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = lookup_manual(
            State(state),
            Ok(Query(ManualLookupParams {
                model: "404d-22g".to_string(),
            })),
        )
        .await
        .into_response();
        let stored: ManualDto = body_json(resp).await;
        assert_eq!(stored.content, "Conteúdo novo");

        Ok(())
    }

    /// Expect 400 when the title or model is blank
    #[tokio::test]
    async fn rejects_missing_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;

        let mut request = manual("404D-22G", "Conteúdo", false);
        request.title = " ".to_string();

        let resp = save_manual(State(test.into_app_state()), Ok(Json(request)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Preencha o título e o modelo do manual.");

        Ok(())
    }
}

mod list_manuals {
    use super::*;

    /// Expect only the manuals matching the search term
    #[tokio::test]
    async fn filters_by_search_term() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_knowledge_tables()
            .with_mock_manual("MLT6SKD", "Torre")
            .with_mock_manual("GSW 30", "Gerador")
            .build()
            .await?;

        let resp = list_manuals(
            State(test.into_app_state()),
            Ok(Query(ManualSearchParams {
                search: Some("gsw".to_string()),
            })),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let manuals: Vec<ManualDto> = body_json(resp).await;
        assert_eq!(manuals.len(), 1);
        assert_eq!(manuals[0].model, "GSW 30");

        Ok(())
    }

    /// Expect every manual without a search term
    #[tokio::test]
    async fn lists_all_without_term() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_knowledge_tables()
            .with_mock_manual("MLT6SKD", "Torre")
            .with_mock_manual("GSW 30", "Gerador")
            .build()
            .await?;

        let resp = list_manuals(
            State(test.into_app_state()),
            Ok(Query(ManualSearchParams { search: None })),
        )
        .await
        .into_response();

        let manuals: Vec<ManualDto> = body_json(resp).await;
        assert_eq!(manuals.len(), 2);

        Ok(())
    }
}

mod lookup_manual {
    use super::*;

    /// Expect 404 for a model without a manual
    #[tokio::test]
    async fn not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;

        let resp = lookup_manual(
            State(test.into_app_state()),
            Ok(Query(ManualLookupParams {
                model: "XYZ".to_string(),
            })),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_manual {
    use super::*;

    /// Expect 204 and the manual gone afterwards
    #[tokio::test]
    async fn deletes_manual() -> Result<(), TestError> {
        let test = TestBuilder::new().with_knowledge_tables().build().await?;
        let stored = test.knowledge().insert_mock_manual("MLT6SKD", "Torre").await?;
        let state = test.into_app_state();

        let resp = delete_manual(State(state.clone()), Ok(Path(stored.id)))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = delete_manual(State(state), Ok(Path(stored.id)))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
