//! Tests for the `POST /api/diagnose` proxy endpoint.

use tecnoloc::{
    model::diagnosis::{DiagnoseRequestDto, DiagnoseResponseDto},
    server::controller::diagnose::diagnose,
};

use super::*;

fn request(prompt: &str, image: Option<&str>) -> DiagnoseRequestDto {
    DiagnoseRequestDto {
        prompt: prompt.to_string(),
        image: image.map(str::to_string),
    }
}

/// Expect 200 with the provider's raw text as `result`
#[tokio::test]
async fn returns_provider_text() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_generate_content_endpoint("Verifique o filtro de combustível.", 1)
        .build()
        .await?;

    let resp = diagnose(
        State(test.into_app_state()),
        Ok(Json(request("Motor falhando", None))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: DiagnoseResponseDto = body_json(resp).await;
    assert_eq!(body.result, "Verifique o filtro de combustível.");
    test.assert_mocks();

    Ok(())
}

/// Expect 200 when a data URL image is sent along with the prompt
#[tokio::test]
async fn accepts_image() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_generate_content_endpoint("Correia rompida.", 1)
        .build()
        .await?;

    let resp = diagnose(
        State(test.into_app_state()),
        Ok(Json(request(
            "O que há de errado?",
            Some("data:image/png;base64,aGVsbG8="),
        ))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 without calling the provider when the prompt is blank
#[tokio::test]
async fn rejects_empty_prompt() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_generate_content_endpoint("não deve ser chamado", 0)
        .build()
        .await?;

    let resp = diagnose(State(test.into_app_state()), Ok(Json(request("  ", None))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Prompt is required");
    test.assert_mocks();

    Ok(())
}

/// Expect 400 when the image is not base64
#[tokio::test]
async fn rejects_invalid_image() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = diagnose(
        State(test.into_app_state()),
        Ok(Json(request("Motor falhando", Some("não é base64!")))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 carrying the provider's own error message
#[tokio::test]
async fn passes_through_provider_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_generate_content_error(400, "API key not valid. Please pass a valid API key.", 1)
        .build()
        .await?;

    let resp = diagnose(
        State(test.into_app_state()),
        Ok(Json(request("Motor falhando", None))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "API key not valid. Please pass a valid API key.");
    test.assert_mocks();

    Ok(())
}
