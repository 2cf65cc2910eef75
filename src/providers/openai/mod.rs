//! OpenAI Responses API adapter.

mod client;
pub mod types;

pub use client::OpenAIProvider;
