use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const ERROR_HEADING: &str = "# Error";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRequest {
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub topic: String,
    pub notes: String,
    pub generated_at: String,
}

/// Result of one provider call, before it is flattened into a `NoteResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(String),
    Failed(String),
}

impl GenerationOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Markdown for the `notes` field. Failures become an error block that
    /// names the topic and the reason.
    pub fn into_notes(self, topic: &str) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Failed(reason) => format!(
                "{ERROR_HEADING}\n\nCould not generate notes for {topic}.\n\nReason: {reason}"
            ),
        }
    }
}

impl NoteResponse {
    pub fn new(topic: String, outcome: GenerationOutcome, generated_at: DateTime<Utc>) -> Self {
        let notes = outcome.into_notes(&topic);
        Self {
            topic,
            notes,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn is_error(&self) -> bool {
        self.notes.starts_with(ERROR_HEADING)
    }
}
