use crate::types::Usage;
use serde::{Deserialize, Serialize};

/// OpenAI input message format for Responses API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OpenAIInputMessage {
    /// Regular message with role and content
    #[serde(rename = "message")]
    Regular { role: String, content: String },
}

/// OpenAI Responses API request.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<OpenAIInputMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
}

/// OpenAI Responses API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub status: Option<String>, // "completed", "incomplete", ...
    pub output: Vec<ResponseOutput>,
    #[serde(default)]
    pub usage: Option<OpenAIUsage>,
}

/// Output item in a Responses API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseOutput {
    pub r#type: String, // "message", "reasoning", "function_call", ...
    #[serde(default)]
    pub content: Option<Vec<ResponseContent>>,
}

/// Content item in a Responses API output.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContent {
    pub r#type: String, // "output_text", "refusal", ...
    #[serde(default)]
    pub text: Option<String>,
}

/// Token usage reported by the Responses API.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl From<OpenAIUsage> for Usage {
    fn from(usage: OpenAIUsage) -> Self {
        Usage {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }
    }
}

impl ResponsesResponse {
    /// Concatenate every `output_text` part in order.
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.r#type == "message")
            .flat_map(|item| item.content.iter().flatten())
            .filter(|part| part.r#type == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}
