//! Provider implementations for different text-generation services.

pub mod anthropic;
pub mod google;
pub(crate) mod http;
pub mod openai;

// Re-export commonly used provider types
pub use anthropic::AnthropicProvider;
pub use google::GoogleProvider;
pub use openai::OpenAIProvider;
