//! OpenAI-compatible Chat Completions client.
//!
//! Implements the `AiClient` trait against any endpoint that speaks the
//! `POST {base_url}/chat/completions` protocol (OpenAI itself, or a
//! universal-key proxy in front of it).

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
