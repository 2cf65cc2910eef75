//! The fluent entry point: `client.prompt(..)?.using_*(..)?.generate_text().await`.

use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::factory::{ProviderFactory, ProviderKind};
use crate::{ClientConfig, Error, GenerationRequest, GenerationResult, TextProvider};

/// Where a client sends its requests.
#[derive(Clone)]
enum Backend {
    /// Resolve a provider from configuration on every call.
    Configured { config: ClientConfig, http: Client },
    /// Always use this provider.
    Fixed(Arc<dyn TextProvider>),
}

/// Entry point for building and sending prompts.
///
/// Cloning is cheap; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct AiClient {
    backend: Backend,
}

impl AiClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            backend: Backend::Configured { config, http },
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client that sends every request to `provider`.
    pub fn with_provider(provider: impl TextProvider) -> Self {
        Self {
            backend: Backend::Fixed(Arc::new(provider)),
        }
    }

    /// Start a request for `prompt`. Fails if the prompt is empty.
    pub fn prompt(&self, prompt: impl Into<String>) -> Result<PromptBuilder<'_>, Error> {
        PromptBuilder::new(self, prompt)
    }

    async fn dispatch(
        &self,
        request: &GenerationRequest,
        preferred: Option<ProviderKind>,
    ) -> Result<GenerationResult, Error> {
        match &self.backend {
            Backend::Fixed(provider) => provider.generate(request).await,
            Backend::Configured { config, http } => {
                // Credentials are checked here so a missing key never reaches the network
                let provider_config = config.resolve(preferred)?;
                let provider = ProviderFactory::create(&provider_config, http.clone());
                debug!(provider = provider.name(), "Dispatching generation request");
                provider.generate(request).await
            }
        }
    }
}

/// Accumulates parameters for one generation call.
///
/// Each `using_*` call consumes the builder and hands it back, so calls chain.
/// Setters that validate return `Result` and fail before anything is sent.
#[must_use = "a prompt does nothing until `generate_text` is awaited"]
pub struct PromptBuilder<'a> {
    client: &'a AiClient,
    request: GenerationRequest,
    provider: Option<ProviderKind>,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(client: &'a AiClient, prompt: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            client,
            request: GenerationRequest::new(prompt)?,
            provider: None,
        })
    }

    /// Set the sampling temperature, which must lie in [0.0, 1.0].
    pub fn using_temperature(mut self, temperature: f32) -> Result<Self, Error> {
        self.request = self.request.with_temperature(temperature)?;
        Ok(self)
    }

    pub fn using_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.request = self.request.with_system_instruction(instruction);
        self
    }

    pub fn using_model(mut self, model: impl Into<String>) -> Result<Self, Error> {
        self.request = self.request.with_model(model)?;
        Ok(self)
    }

    pub fn using_max_tokens(mut self, max_tokens: u32) -> Result<Self, Error> {
        self.request = self.request.with_max_tokens(max_tokens)?;
        Ok(self)
    }

    /// Send this request to `kind` regardless of the configured preference.
    /// Ignored by clients created with [`AiClient::with_provider`].
    pub fn using_provider(mut self, kind: ProviderKind) -> Self {
        self.provider = Some(kind);
        self
    }

    /// The request as it will be sent.
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Send the request and return the full result.
    pub async fn generate(self) -> Result<GenerationResult, Error> {
        self.client.dispatch(&self.request, self.provider).await
    }

    /// Send the request and return only the generated text.
    pub async fn generate_text(self) -> Result<String, Error> {
        Ok(self.generate().await?.text)
    }
}
