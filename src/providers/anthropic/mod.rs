//! Anthropic Messages API adapter.

mod client;
pub mod types;

pub use client::AnthropicProvider;
