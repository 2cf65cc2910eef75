use reqwest::Client;
use tracing::{debug, instrument};

use super::types::*;
use crate::provider::TextProvider;
use crate::providers::http::send_json;
use crate::types::DEFAULT_TIMEOUT;
use crate::{Error, GenerationRequest, GenerationResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Google Gemini provider implementation.
pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl GoogleProvider {
    /// Create a new Google provider authenticated with an API key.
    pub fn new(api_key: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client, api_key))
    }

    /// Create a provider that reuses an existing HTTP client.
    pub fn with_client(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_default_model(mut self, model: String) -> Self {
        self.default_model = model;
        self
    }

    /// Convert a generation request to Gemini format.
    pub(crate) fn convert_request(&self, request: &GenerationRequest) -> GoogleRequest {
        let generation_config = GoogleGenerationConfig {
            temperature: request.temperature(),
            max_output_tokens: request.max_tokens(),
        };

        GoogleRequest {
            contents: vec![GoogleContent::text(Some("user"), request.prompt())],
            system_instruction: request
                .system_instruction()
                .map(|instruction| GoogleContent::text(None, instruction)),
            generation_config: (!generation_config.is_empty()).then_some(generation_config),
        }
    }

    /// Get the API endpoint for a model.
    fn get_endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        )
    }

    fn convert_response(response: GoogleResponse) -> Result<GenerationResult, Error> {
        let text = response.text();
        if text.is_empty() {
            let reason = response
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .or_else(|| {
                    response
                        .candidates
                        .first()
                        .and_then(|candidate| candidate.finish_reason.clone())
                })
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(Error::provider(
                "Google",
                format!("Response contained no text ({reason})"),
            ));
        }

        let finish_reason = response
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.clone());

        Ok(GenerationResult::from_text(text)
            .with_usage(response.usage_metadata.map(Into::into).unwrap_or_default())
            .with_finish_reason(finish_reason))
    }
}

#[async_trait::async_trait]
impl TextProvider for GoogleProvider {
    fn name(&self) -> &'static str {
        "Google"
    }

    #[instrument(skip_all, fields(provider = "Google", model))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, Error> {
        let google_request = self.convert_request(request);
        let model = request.model().unwrap_or(&self.default_model);
        tracing::Span::current().record("model", model);

        let endpoint = self.get_endpoint(model);
        debug!(%endpoint, "Sending generateContent request");
        let http_request = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&google_request);

        let response: GoogleResponse = send_json("Google", http_request).await?;
        let result = Self::convert_response(response)?;
        debug!(
            output_tokens = result.usage.output_tokens,
            "generateContent request completed"
        );

        Ok(result)
    }
}
