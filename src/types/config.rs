use std::env;
use std::time::Duration;

use crate::factory::{ProviderConfig, ProviderKind};
use crate::Error;

/// Transport timeout used when `AI_REQUEST_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Credentials and overrides for one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Process-wide client configuration.
///
/// Loading never fails because of missing credentials; those are reported
/// by [`ClientConfig::resolve`] when a request is about to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub preferred_provider: Option<ProviderKind>,
    pub openai: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub google: ProviderSettings,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            preferred_provider: None,
            openai: ProviderSettings::default(),
            anthropic: ProviderSettings::default(),
            google: ProviderSettings::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let preferred_provider = var("AI_PROVIDER")
            .map(|value| value.parse::<ProviderKind>())
            .transpose()?;

        let timeout = match var("AI_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(Error::config(format!(
                        "AI_REQUEST_TIMEOUT_SECS must be a positive number of seconds, got '{raw}'"
                    )))
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            preferred_provider,
            openai: ProviderSettings {
                api_key: var("OPENAI_API_KEY"),
                base_url: var("OPENAI_BASE_URL"),
                model: var("OPENAI_MODEL"),
            },
            anthropic: ProviderSettings {
                api_key: var("ANTHROPIC_API_KEY"),
                base_url: var("ANTHROPIC_BASE_URL"),
                model: var("ANTHROPIC_MODEL"),
            },
            google: ProviderSettings {
                api_key: var("GOOGLE_API_KEY").or_else(|| var("GEMINI_API_KEY")),
                base_url: var("GOOGLE_BASE_URL"),
                model: var("GOOGLE_MODEL"),
            },
            timeout,
        })
    }

    pub fn with_openai_key(mut self, api_key: impl Into<String>) -> Self {
        self.openai.api_key = Some(api_key.into());
        self
    }

    pub fn with_anthropic_key(mut self, api_key: impl Into<String>) -> Self {
        self.anthropic.api_key = Some(api_key.into());
        self
    }

    pub fn with_google_key(mut self, api_key: impl Into<String>) -> Self {
        self.google.api_key = Some(api_key.into());
        self
    }

    /// Point one provider at a different endpoint (proxies, mock servers).
    pub fn with_base_url(mut self, kind: ProviderKind, base_url: impl Into<String>) -> Self {
        self.settings_mut(kind).base_url = Some(base_url.into());
        self
    }

    pub fn with_default_model(mut self, kind: ProviderKind, model: impl Into<String>) -> Self {
        self.settings_mut(kind).model = Some(model.into());
        self
    }

    pub fn with_preferred_provider(mut self, kind: ProviderKind) -> Self {
        self.preferred_provider = Some(kind);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn settings(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::OpenAI => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::Google => &self.google,
        }
    }

    fn settings_mut(&mut self, kind: ProviderKind) -> &mut ProviderSettings {
        match kind {
            ProviderKind::OpenAI => &mut self.openai,
            ProviderKind::Anthropic => &mut self.anthropic,
            ProviderKind::Google => &mut self.google,
        }
    }

    /// Pick the provider for one call.
    ///
    /// `preferred` (from the request builder) wins over the configured
    /// preference. Without any preference the first provider holding a key
    /// is used, in the order OpenAI, Anthropic, Google.
    pub fn resolve(&self, preferred: Option<ProviderKind>) -> Result<ProviderConfig, Error> {
        if let Some(kind) = preferred.or(self.preferred_provider) {
            let settings = self.settings(kind);
            let api_key = settings.api_key.clone().ok_or_else(|| {
                Error::config(format!(
                    "{} environment variable is required for the {kind} provider",
                    kind.api_key_var()
                ))
            })?;
            return Ok(ProviderConfig::new(kind, api_key, settings));
        }

        ProviderKind::ALL
            .into_iter()
            .find_map(|kind| {
                let settings = self.settings(kind);
                settings
                    .api_key
                    .clone()
                    .map(|api_key| ProviderConfig::new(kind, api_key, settings))
            })
            .ok_or_else(|| {
                Error::config(
                    "No provider credentials found. Set OPENAI_API_KEY, ANTHROPIC_API_KEY or GOOGLE_API_KEY",
                )
            })
    }
}
