use super::{
    ProviderConfig, ProviderTestSetup, MAX_TOKENS, PROMPT, REPLY, SYSTEM_INSTRUCTION,
};
use ai_client::{ClientConfig, ProviderKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct OpenAITestSetup;

#[async_trait::async_trait]
impl ProviderTestSetup for OpenAITestSetup {
    fn get_config() -> ProviderConfig {
        ProviderConfig {
            name: "OpenAI",
            kind: ProviderKind::OpenAI,
            model: "gpt-4o-mini",
        }
    }

    fn with_credentials(config: ClientConfig) -> ClientConfig {
        config.with_openai_key("test-api-key")
    }

    async fn mount_generation_mocks(mock_server: &MockServer) {
        let request_payload = json!({
            "model": "gpt-4o-mini",
            "input": [
                {
                    "type": "message",
                    "role": "user",
                    "content": PROMPT
                }
            ],
            "instructions": SYSTEM_INSTRUCTION,
            "temperature": 0.5,
            "max_output_tokens": MAX_TOKENS,
            "store": false
        });

        let response_payload = json!({
            "id": "resp_123",
            "object": "response",
            "created_at": 1741290958,
            "status": "completed",
            "model": "gpt-4o-mini-2024-07-18",
            "output": [
                {
                    "type": "message",
                    "id": "msg_123",
                    "status": "completed",
                    "role": "assistant",
                    "content": [{"type": "output_text", "text": REPLY, "annotations": []}]
                }
            ],
            "usage": {"input_tokens": 36, "output_tokens": 18, "total_tokens": 54}
        });

        Mock::given(method("POST"))
            .and(path("/responses"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_json(request_payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_payload))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    async fn mount_error_mock(mock_server: &MockServer, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/responses"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {"message": message, "type": "invalid_request_error", "param": null, "code": null}
            })))
            .expect(1)
            .mount(mock_server)
            .await;
    }
}
