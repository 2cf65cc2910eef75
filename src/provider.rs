use crate::{Error, GenerationRequest, GenerationResult};

/// A trait for services that turn a prompt into generated text.
#[async_trait::async_trait]
pub trait TextProvider: Send + Sync + 'static {
    /// Human-readable provider name, used in errors and logs.
    fn name(&self) -> &'static str;

    /// Send `request` and wait for the complete response.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, Error>;
}
