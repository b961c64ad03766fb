mod client;
pub mod probe;
mod types;

pub use client::{LlmClient, OpenAiClient};
pub use types::*;
