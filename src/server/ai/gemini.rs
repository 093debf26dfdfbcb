use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{diagnosis::ImagePayload, server::error::ai::AiError};

/// Connection settings for [`GeminiClient`].
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// Base URL, without the `/v1beta` path
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

/// Sends prompts, with an optional image, to the Gemini `generateContent` endpoint.
///
/// Each call is a single attempt: failures are returned to the caller as they are.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

impl GeminiClient {
    /// Creates a new client for the configured model
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = Client::builder()
            .user_agent(concat!("tecnoloc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AiError::Client)?;

        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }

    /// Generates content for a prompt and returns the text of the first candidate.
    ///
    /// The image, when given, is sent as an inline data part after the prompt.
    ///
    /// # Returns
    /// - `Ok(String)` - Concatenated text parts of the first candidate
    /// - `Err(AiError::Transport)` - The provider could not be reached
    /// - `Err(AiError::Provider)` - The provider answered with a non-success status
    /// - `Err(AiError::Decode)` - The success body is not a generateContent response
    /// - `Err(AiError::EmptyResponse)` - The provider returned no candidate text
    pub async fn generate_content(
        &self,
        prompt: &str,
        image: Option<&ImagePayload>,
    ) -> Result<String, AiError> {
        let mut parts = vec![RequestPart::Text { text: prompt }];
        if let Some(image) = image {
            parts.push(RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: &image.mime_type,
                    data: &image.data,
                },
            });
        }

        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let res = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ProviderErrorBody>(&body) {
                Ok(err) => err.error.message,
                Err(_) if body.trim().is_empty() => status.to_string(),
                Err(_) => body,
            };

            return Err(AiError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse =
            serde_json::from_str(&body).map_err(AiError::Decode)?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AiError::EmptyResponse {
                block_reason: response.prompt_feedback.and_then(|f| f.block_reason),
            });
        }

        Ok(text)
    }
}
