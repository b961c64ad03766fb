//! Connectivity probe: find the first model in a candidate list that the
//! provider will actually answer with.

use super::{ChatCompletionRequest, ChatMessage, LlmClient};
use crate::Error;
use std::fmt;
use tracing::debug;

pub const PROBE_PROMPT: &str = "Say hello";

const ERROR_EXCERPT_CHARS: usize = 60;
const REPLY_EXCERPT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success { reply: String },
    NotFound,
    NoQuota,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeAttempt {
    pub model: String,
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    pub attempts: Vec<ProbeAttempt>,
}

impl ProbeReport {
    /// The model that answered, if any.
    pub fn working_model(&self) -> Option<&ProbeAttempt> {
        self.attempts
            .iter()
            .find(|attempt| matches!(attempt.outcome, ProbeOutcome::Success { .. }))
    }
}

impl ProbeOutcome {
    pub fn classify(error: &Error) -> Self {
        let message = error.to_string();
        let lowered = message.to_lowercase();

        if message.contains("404") || lowered.contains("not found") {
            Self::NotFound
        } else if lowered.contains("quota") || lowered.contains("resource") {
            Self::NoQuota
        } else {
            Self::Error(excerpt(&message, ERROR_EXCERPT_CHARS))
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { reply } => write!(f, "SUCCESS: {}...", excerpt(reply, REPLY_EXCERPT_CHARS)),
            Self::NotFound => write!(f, "Not found (404)"),
            Self::NoQuota => write!(f, "No quota available"),
            Self::Error(msg) => write!(f, "Error: {}...", msg),
        }
    }
}

/// Tries each candidate in order and stops at the first one that answers.
pub async fn find_working_model(client: &dyn LlmClient, candidates: &[String]) -> ProbeReport {
    let mut report = ProbeReport::default();

    for model in candidates {
        debug!(model = %model, "Probing model");

        let request = ChatCompletionRequest {
            model: model.clone(),
            messages: vec![ChatMessage::user(PROBE_PROMPT)],
            max_tokens: None,
            temperature: None,
        };

        let outcome = match client.create_chat_completion(request).await {
            Ok(response) => match response.text() {
                Some(reply) => ProbeOutcome::Success {
                    reply: reply.to_string(),
                },
                None => ProbeOutcome::classify(&Error::EmptyCompletion {
                    model: model.clone(),
                }),
            },
            Err(e) => ProbeOutcome::classify(&e),
        };

        debug!(model = %model, "{}", outcome);

        let found = matches!(outcome, ProbeOutcome::Success { .. });
        report.attempts.push(ProbeAttempt {
            model: model.clone(),
            outcome,
        });

        if found {
            break;
        }
    }

    report
}

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
