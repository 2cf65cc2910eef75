use std::fmt;
use std::str::FromStr;

use reqwest::Client;

use crate::providers::{AnthropicProvider, GoogleProvider, OpenAIProvider};
use crate::types::ProviderSettings;
use crate::{Error, TextProvider};

/// Supported text-generation providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    Google,
}

impl ProviderKind {
    /// Resolution order used when no provider is preferred.
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::OpenAI,
        ProviderKind::Anthropic,
        ProviderKind::Google,
    ];

    /// Environment variable holding this provider's API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::Google => "GOOGLE_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::Google => "Google",
        };
        f.write_str(name)
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "google" | "gemini" => Ok(ProviderKind::Google),
            _ => Err(Error::config(format!(
                "Invalid provider '{s}'. Valid values are: openai, anthropic, google"
            ))),
        }
    }
}

/// A resolved provider: which API to call and with which credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind, api_key: String, settings: &ProviderSettings) -> Self {
        Self {
            kind,
            api_key,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
        }
    }
}

/// Factory for creating text providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from a resolved configuration, sharing `client`'s
    /// connection pool.
    pub fn create(config: &ProviderConfig, client: Client) -> Box<dyn TextProvider> {
        let api_key = config.api_key.clone();

        match config.kind {
            ProviderKind::OpenAI => {
                let mut provider = OpenAIProvider::with_client(client, api_key);
                if let Some(base_url) = &config.base_url {
                    provider = provider.with_base_url(base_url.clone());
                }
                if let Some(model) = &config.model {
                    provider = provider.with_default_model(model.clone());
                }
                Box::new(provider)
            }
            ProviderKind::Anthropic => {
                let mut provider = AnthropicProvider::with_client(client, api_key);
                if let Some(base_url) = &config.base_url {
                    provider = provider.with_base_url(base_url.clone());
                }
                if let Some(model) = &config.model {
                    provider = provider.with_default_model(model.clone());
                }
                Box::new(provider)
            }
            ProviderKind::Google => {
                let mut provider = GoogleProvider::with_client(client, api_key);
                if let Some(base_url) = &config.base_url {
                    provider = provider.with_base_url(base_url.clone());
                }
                if let Some(model) = &config.model {
                    provider = provider.with_default_model(model.clone());
                }
                Box::new(provider)
            }
        }
    }
}
