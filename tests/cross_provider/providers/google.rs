use super::{
    ProviderConfig, ProviderTestSetup, MAX_TOKENS, PROMPT, REPLY, SYSTEM_INSTRUCTION,
};
use ai_client::{ClientConfig, ProviderKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct GoogleTestSetup;

const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

#[async_trait::async_trait]
impl ProviderTestSetup for GoogleTestSetup {
    fn get_config() -> ProviderConfig {
        ProviderConfig {
            name: "Google",
            kind: ProviderKind::Google,
            model: "gemini-2.0-flash",
        }
    }

    fn with_credentials(config: ClientConfig) -> ClientConfig {
        config.with_google_key("test-api-key")
    }

    async fn mount_generation_mocks(mock_server: &MockServer) {
        let request_payload = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{"text": PROMPT}]
                }
            ],
            "systemInstruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
            "generationConfig": {
                "temperature": 0.5,
                "maxOutputTokens": MAX_TOKENS
            }
        });

        let response_payload = json!({
            "candidates": [
                {
                    "content": {"role": "model", "parts": [{"text": REPLY}]},
                    "finishReason": "STOP",
                    "avgLogprobs": -0.12
                }
            ],
            "usageMetadata": {
                "promptTokenCount": 25,
                "candidatesTokenCount": 15,
                "totalTokenCount": 40
            },
            "modelVersion": "gemini-2.0-flash"
        });

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_json(request_payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_payload))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    async fn mount_error_mock(mock_server: &MockServer, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {"code": status, "message": message, "status": "PERMISSION_DENIED"}
            })))
            .expect(1)
            .mount(mock_server)
            .await;
    }
}
