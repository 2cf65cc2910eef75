//! A fluent prompt builder over hosted text-generation APIs.
//!
//! This library sends a single prompt, with optional temperature, system instruction,
//! model and output cap, to OpenAI, Anthropic or Google Gemini and returns the generated text.
//!
//! ```no_run
//! # async fn demo() -> Result<(), ai_client::Error> {
//! let client = ai_client::AiClient::from_env()?;
//! let haiku = client
//!     .prompt("Write a haiku about code.")?
//!     .using_temperature(0.7)?
//!     .generate_text()
//!     .await?;
//! println!("{haiku}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod showcase;
pub mod types;

// Re-export core types for easy usage
pub use client::{AiClient, PromptBuilder};
pub use error::{Error, ErrorKind};
pub use factory::{ProviderConfig, ProviderFactory, ProviderKind};
pub use provider::TextProvider;
pub use providers::*;
pub use types::*;
