//! Google Gemini `generateContent` adapter.

mod client;
pub mod types;

pub use client::GoogleProvider;
