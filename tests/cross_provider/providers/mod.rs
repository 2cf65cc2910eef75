pub mod anthropic;
pub mod google;
pub mod openai;

use ai_client::{ClientConfig, ProviderKind};
use wiremock::MockServer;

pub const PROMPT: &str = "List the key features of a WordPress AI content generation plugin";
pub const SYSTEM_INSTRUCTION: &str = "You are a WordPress AI expert. ALWAYS respond with valid JSON.";
pub const TEMPERATURE: f32 = 0.5;
pub const MAX_TOKENS: u32 = 200;
pub const REPLY: &str = r#"{"features": [{"name": "drafting", "importance": "high"}]}"#;

/// Provider configuration for cross-provider testing
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: &'static str,
    pub kind: ProviderKind,
    pub model: &'static str,
}

/// Trait for provider-specific test setup
#[async_trait::async_trait]
pub trait ProviderTestSetup {
    /// Get the provider configuration
    fn get_config() -> ProviderConfig;

    /// Add this provider's credentials to `config`
    fn with_credentials(config: ClientConfig) -> ClientConfig;

    /// Mount a mock that only answers the exact expected request payload
    async fn mount_generation_mocks(mock_server: &MockServer);

    /// Mount a mock answering with `status` and the provider's error envelope
    async fn mount_error_mock(mock_server: &MockServer, status: u16, message: &str);
}
