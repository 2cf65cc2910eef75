use reqwest::Client;
use tracing::{debug, instrument};

use super::types::*;
use crate::provider::TextProvider;
use crate::providers::http::send_json;
use crate::types::DEFAULT_TIMEOUT;
use crate::{Error, GenerationRequest, GenerationResult};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// The Messages API rejects requests without `max_tokens`.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Anthropic Claude provider implementation.
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider.
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

    /// Convert a generation request to Anthropic format.
    pub(crate) fn convert_request(&self, request: &GenerationRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: request
                .model()
                .unwrap_or(&self.default_model)
                .to_string(),
            max_tokens: request.max_tokens().unwrap_or(DEFAULT_MAX_TOKENS),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.prompt().to_string(),
            }],
            // Anthropic uses a separate system field
            system: request.system_instruction().map(str::to_string),
            temperature: request.temperature(),
        }
    }

    fn convert_response(response: AnthropicResponse) -> Result<GenerationResult, Error> {
        let text = response.text();
        if text.is_empty() {
            return Err(Error::provider("Anthropic", "Response contained no text blocks"));
        }

        Ok(GenerationResult::from_text(text)
            .with_usage(response.usage.map(Into::into).unwrap_or_default())
            .with_finish_reason(response.stop_reason))
    }
}

#[async_trait::async_trait]
impl TextProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "Anthropic"
    }

    #[instrument(skip_all, fields(provider = "Anthropic", model))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, Error> {
        let anthropic_request = self.convert_request(request);
        tracing::Span::current().record("model", anthropic_request.model.as_str());

        debug!(url = %self.base_url, "Sending messages request");
        let http_request = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&anthropic_request);

        let response: AnthropicResponse = send_json("Anthropic", http_request).await?;
        let result = Self::convert_response(response)?;
        debug!(
            output_tokens = result.usage.output_tokens,
            stop_reason = ?result.finish_reason,
            "Messages request completed"
        );

        Ok(result)
    }
}
