use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::GenerationError;

/// Result of one completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok { content: String },
    Error { error: GenerationError },
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// The string shown on the page and offered for download.
    pub fn display_text(&self) -> String {
        match self {
            Outcome::Ok { content } => content.clone(),
            Outcome::Error { error } => error.display_text(),
        }
    }
}

impl From<Result<String, GenerationError>> for Outcome {
    fn from(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(content) => Outcome::Ok { content },
            Err(error) => Outcome::Error { error },
        }
    }
}

/// The currently displayed result. Replaced wholesale by the next generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub difficulty: Difficulty,
    pub prompt: String,
    pub outcome: Outcome,
    pub generated_at: DateTime<Utc>,
}

impl Material {
    pub fn new(difficulty: Difficulty, prompt: String, outcome: Outcome) -> Self {
        Self {
            difficulty,
            prompt,
            outcome,
            generated_at: Utc::now(),
        }
    }

    pub fn display_text(&self) -> String {
        self.outcome.display_text()
    }
}
