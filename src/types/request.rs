use serde::Serialize;

use crate::Error;

/// Inclusive bounds accepted for the sampling temperature.
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.0;

/// A single text-generation request.
///
/// Every setter validates its input, so a `GenerationRequest` that exists is
/// always submittable. Providers only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Create a request for `prompt`. The text is kept verbatim.
    pub fn new(prompt: impl Into<String>) -> Result<Self, Error> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Err(Error::invalid_argument("prompt must not be empty"));
        }

        Ok(Self {
            prompt,
            temperature: None,
            system_instruction: None,
            model: None,
            max_tokens: None,
        })
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Result<Self, Error> {
        // NaN fails `contains`, so it is rejected here as well.
        if !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(Error::invalid_argument(format!(
                "temperature must be within [0.0, 1.0], got {temperature}"
            )));
        }
        self.temperature = Some(temperature);
        Ok(self)
    }

    /// Set the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Override the provider's default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Result<Self, Error> {
        let model = model.into();
        if model.is_empty() {
            return Err(Error::invalid_argument("model name must not be empty"));
        }
        self.model = Some(model);
        Ok(self)
    }

    /// Cap the number of generated tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Result<Self, Error> {
        if max_tokens == 0 {
            return Err(Error::invalid_argument("max_tokens must be greater than zero"));
        }
        self.max_tokens = Some(max_tokens);
        Ok(self)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }
}
