use ai_client::{AiClient, ClientConfig, Error, ErrorKind, ProviderKind};
use wiremock::MockServer;

use super::providers::{
    anthropic::AnthropicTestSetup, google::GoogleTestSetup, openai::OpenAITestSetup,
    ProviderTestSetup, MAX_TOKENS, PROMPT, REPLY, SYSTEM_INSTRUCTION, TEMPERATURE,
};

/// Credentials for every provider, all pointed at `mock_server`.
fn client_for_all_providers(mock_server: &MockServer) -> AiClient {
    let mut config = ClientConfig::default()
        .with_openai_key("test-api-key")
        .with_anthropic_key("test-api-key")
        .with_google_key("test-api-key");
    for kind in ProviderKind::ALL {
        config = config.with_base_url(kind, mock_server.uri());
    }
    AiClient::new(config).expect("Failed to create client")
}

/// Run the generation e2e test for a specific provider
async fn run_generate_text_test<T: ProviderTestSetup>() {
    let config = T::get_config();

    let mock_server = MockServer::start().await;
    T::mount_generation_mocks(&mock_server).await;

    // Every provider has a key, so only the pinned one may be called
    let client = client_for_all_providers(&mock_server);

    let result = client
        .prompt(PROMPT)
        .unwrap()
        .using_system_instruction(SYSTEM_INSTRUCTION)
        .using_temperature(TEMPERATURE)
        .unwrap()
        .using_max_tokens(MAX_TOKENS)
        .unwrap()
        .using_model(config.model)
        .unwrap()
        .using_provider(config.kind)
        .generate()
        .await
        .unwrap_or_else(|e| panic!("{} request failed: {e}", config.name));

    assert_eq!(result.text, REPLY, "{} returned unexpected text", config.name);
    assert!(result.usage.input_tokens > 0);
    assert!(result.usage.output_tokens > 0);
    assert!(result.finish_reason.is_some());

    // The demo asks for JSON; the text must come back untouched so callers can parse it
    let parsed: serde_json::Value = serde_json::from_str(&result.text).unwrap();
    assert_eq!(parsed["features"][0]["name"], "drafting");
}

/// A rejected key surfaces as an authentication error carrying the provider's message
async fn run_auth_failure_test<T: ProviderTestSetup>() {
    let config = T::get_config();

    let mock_server = MockServer::start().await;
    T::mount_error_mock(&mock_server, 403, "API key not valid").await;

    let client_config =
        T::with_credentials(ClientConfig::default()).with_base_url(config.kind, mock_server.uri());
    let client = AiClient::new(client_config).unwrap();

    let err = client
        .prompt(PROMPT)
        .unwrap()
        .generate_text()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Provider);
    match err {
        Error::Auth(message) => {
            assert!(message.contains(config.name));
            assert!(message.contains("API key not valid"));
        }
        other => panic!("{}: expected auth error, got {other:?}", config.name),
    }
}

#[tokio::test]
async fn test_openai_generate_text() {
    run_generate_text_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_anthropic_generate_text() {
    run_generate_text_test::<AnthropicTestSetup>().await;
}

#[tokio::test]
async fn test_google_generate_text() {
    run_generate_text_test::<GoogleTestSetup>().await;
}

#[tokio::test]
async fn test_openai_auth_failure() {
    run_auth_failure_test::<OpenAITestSetup>().await;
}

#[tokio::test]
async fn test_anthropic_auth_failure() {
    run_auth_failure_test::<AnthropicTestSetup>().await;
}

#[tokio::test]
async fn test_google_auth_failure() {
    run_auth_failure_test::<GoogleTestSetup>().await;
}
