//! Gemini REST client for structured generation and image generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{GenerateError, GenerativeClient, InlineImage};

/// Default base URL for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for structured recipe generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for dish-image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Gemini API client.
#[derive(Debug)]
pub struct GeminiClient {
    base_url: String,
    text_model: String,
    image_model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client with explicit model names.
    pub fn new(text_model: String, image_model: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model,
            image_model,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client with the default models, honoring optional overrides:
    /// `SKILLET_TEXT_MODEL`, `SKILLET_IMAGE_MODEL`, `SKILLET_API_BASE_URL`.
    pub fn from_env() -> Self {
        let text_model =
            std::env::var("SKILLET_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let image_model = std::env::var("SKILLET_IMAGE_MODEL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        let base_url =
            std::env::var("SKILLET_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut client = Self::new(text_model, image_model);
        client.base_url = base_url;
        client
    }

    /// Override the base URL, e.g. to point tests at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerateError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerateError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(GenerateError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::RequestFailed(e.to_string()))?;

        if status != 200 {
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(GenerateError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(GenerateError::ApiError {
                status,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GenerateError::ParseError(e.to_string()))
    }
}

/// Gemini request format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: JsonValue,
}

/// Gemini response format.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_structured(
        &self,
        api_key: &str,
        system_instruction: &str,
        prompt: &str,
        response_schema: &JsonValue,
    ) -> Result<String, GenerateError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            system_instruction: Some(Content::text(system_instruction)),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema.clone(),
            }),
        };

        tracing::debug!(model = %self.text_model, "requesting structured generation");
        let response = self
            .generate_content(api_key, &self.text_model, &request)
            .await?;

        // Concatenate the text parts of the first candidate.
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerateError::ParseError(
                "No text content in response".to_string(),
            ));
        }

        Ok(text)
    }

    async fn generate_image(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<Option<InlineImage>, GenerateError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            system_instruction: None,
            generation_config: None,
        };

        tracing::debug!(model = %self.image_model, "requesting image generation");
        let response = self
            .generate_content(api_key, &self.image_model, &request)
            .await?;

        // First inline payload of the first candidate, if any.
        let image = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| {
                content
                    .parts
                    .into_iter()
                    .find_map(|p| p.inline_data)
                    .map(|d| InlineImage {
                        mime_type: d.mime_type,
                        data: d.data,
                    })
            });

        Ok(image)
    }

    fn model_name(&self) -> &str {
        &self.text_model
    }
}
