use super::types::{OpenAIInputMessage, ResponsesRequest, ResponsesResponse};
use crate::provider::TextProvider;
use crate::providers::http::send_json;
use crate::types::DEFAULT_TIMEOUT;
use crate::{Error, GenerationRequest, GenerationResult};
use reqwest::Client;
use tracing::{debug, instrument};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI provider implementation.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
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

    /// Model used when the request does not name one.
    pub fn with_default_model(mut self, model: String) -> Self {
        self.default_model = model;
        self
    }

    /// Convert a generation request to OpenAI Responses API format.
    pub(crate) fn convert_request(&self, request: &GenerationRequest) -> ResponsesRequest {
        ResponsesRequest {
            model: request
                .model()
                .unwrap_or(&self.default_model)
                .to_string(),
            input: vec![OpenAIInputMessage::Regular {
                role: "user".to_string(),
                content: request.prompt().to_string(),
            }],
            instructions: request.system_instruction().map(str::to_string),
            temperature: request.temperature(),
            max_output_tokens: request.max_tokens(),
            store: Some(false), // Don't store generations server-side
        }
    }

    fn convert_response(response: ResponsesResponse) -> Result<GenerationResult, Error> {
        let text = response.output_text();
        if text.is_empty() {
            return Err(Error::provider("OpenAI", "Response contained no output text"));
        }

        Ok(GenerationResult::from_text(text)
            .with_usage(response.usage.map(Into::into).unwrap_or_default())
            .with_finish_reason(response.status))
    }
}

#[async_trait::async_trait]
impl TextProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    #[instrument(skip_all, fields(provider = "OpenAI", model))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, Error> {
        let openai_request = self.convert_request(request);
        tracing::Span::current().record("model", openai_request.model.as_str());

        debug!(url = %self.base_url, "Sending responses request");
        let http_request = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&openai_request);

        let response: ResponsesResponse = send_json("OpenAI", http_request).await?;
        let result = Self::convert_response(response)?;
        debug!(
            output_tokens = result.usage.output_tokens,
            "Responses request completed"
        );

        Ok(result)
    }
}
