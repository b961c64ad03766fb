use super::types::{GenerationOutcome, NoteResponse};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

pub fn build_prompt(topic: &str) -> String {
    format!(
        "Generate structured, markdown-formatted study notes for: {topic}. \
         Include Key Concepts, Code Examples, and Exam Tips."
    )
}

/// Turns a topic into study notes. Provider failures never escape: they are
/// reported inside the returned `NoteResponse`.
pub struct NotesGateway {
    client: Option<Arc<dyn LlmClient>>,
    model: String,
    system_prompt: String,
}

impl NotesGateway {
    pub fn new(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            client: Some(client),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// A gateway with no provider; every call takes the failure path.
    pub fn disabled(config: &LlmConfig) -> Self {
        Self {
            client: None,
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        match OpenAiClient::new(config) {
            Ok(client) => {
                info!(model = %config.model, "Notes provider configured");
                Self::new(Arc::new(client), config)
            }
            Err(e) => {
                warn!("Notes provider disabled: {}", e);
                Self::disabled(config)
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate_notes(&self, topic: String) -> NoteResponse {
        let outcome = self.generate(&topic).await;
        NoteResponse::new(topic, outcome, Utc::now())
    }

    pub async fn generate(&self, topic: &str) -> GenerationOutcome {
        match self.complete(topic).await {
            Ok(text) => GenerationOutcome::Generated(text),
            Err(e) => {
                error!(topic = %topic, "AI Error: {}", e);
                GenerationOutcome::Failed(e.to_string())
            }
        }
    }

    async fn complete(&self, topic: &str) -> Result<String> {
        let client = self.client.as_ref().ok_or_else(|| {
            Error::ProviderDisabled(format!("{} is not set", crate::config::API_KEY_ENV))
        })?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(build_prompt(topic)),
            ],
            max_tokens: None,
            temperature: None,
        };

        let response = client.create_chat_completion(request).await?;

        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| Error::EmptyCompletion {
                model: self.model.clone(),
            })
    }
}
