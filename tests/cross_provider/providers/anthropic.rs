use super::{
    ProviderConfig, ProviderTestSetup, MAX_TOKENS, PROMPT, REPLY, SYSTEM_INSTRUCTION,
};
use ai_client::{ClientConfig, ProviderKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct AnthropicTestSetup;

#[async_trait::async_trait]
impl ProviderTestSetup for AnthropicTestSetup {
    fn get_config() -> ProviderConfig {
        ProviderConfig {
            name: "Anthropic",
            kind: ProviderKind::Anthropic,
            model: "claude-3-5-haiku-latest",
        }
    }

    fn with_credentials(config: ClientConfig) -> ClientConfig {
        config.with_anthropic_key("test-api-key")
    }

    async fn mount_generation_mocks(mock_server: &MockServer) {
        let request_payload = json!({
            "model": "claude-3-5-haiku-latest",
            "max_tokens": MAX_TOKENS,
            "messages": [
                {
                    "role": "user",
                    "content": PROMPT
                }
            ],
            "system": SYSTEM_INSTRUCTION,
            "temperature": 0.5
        });

        let response_payload = json!({
            "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-haiku-20241022",
            "content": [{"type": "text", "text": REPLY}],
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": {"input_tokens": 30, "output_tokens": 20}
        });

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_json(request_payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_payload))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    async fn mount_error_mock(mock_server: &MockServer, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": message}
            })))
            .expect(1)
            .mount(mock_server)
            .await;
    }
}
