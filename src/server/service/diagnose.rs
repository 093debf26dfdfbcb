use crate::{
    diagnosis::ImagePayload,
    model::diagnosis::DiagnoseRequestDto,
    server::{
        ai::gemini::GeminiClient,
        error::{diagnosis::DiagnosisError, Error},
    },
};

/// Forwards a raw prompt to the AI provider, holding the credential on the server.
pub struct DiagnoseService<'a> {
    ai_client: &'a GeminiClient,
}

impl<'a> DiagnoseService<'a> {
    /// Creates a new instance of [`DiagnoseService`]
    pub fn new(ai_client: &'a GeminiClient) -> Self {
        Self { ai_client }
    }

    /// Sends the prompt, and the image when one is given, and returns the provider's text.
    ///
    /// # Returns
    /// - `Ok(String)` - Text produced by the model
    /// - `Err(Error::DiagnosisError)` - Empty prompt or image that is not base64
    /// - `Err(Error::AiError)` - The provider failed or returned no answer
    pub async fn forward(&self, request: &DiagnoseRequestDto) -> Result<String, Error> {
        if request.prompt.trim().is_empty() {
            return Err(DiagnosisError::EmptyPrompt.into());
        }

        let image = parse_image(request.image.as_deref())?;

        let text = self
            .ai_client
            .generate_content(&request.prompt, image.as_ref())
            .await?;

        Ok(text)
    }
}

/// A missing or blank image means no image part.
pub(crate) fn parse_image(image: Option<&str>) -> Result<Option<ImagePayload>, DiagnosisError> {
    match image.map(str::trim).filter(|image| !image.is_empty()) {
        Some(image) => Ok(Some(ImagePayload::from_data_url(image)?)),
        None => Ok(None),
    }
}
