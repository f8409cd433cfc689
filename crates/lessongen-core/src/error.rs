use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix put in front of a failure's detail when it is shown as page content.
pub const ERROR_PREFIX: &str = "오류 발생: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    Authentication,
    RateLimited,
    MalformedResponse,
    Api,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Authentication => "authentication",
            FailureKind::RateLimited => "rate_limited",
            FailureKind::MalformedResponse => "malformed_response",
            FailureKind::Api => "api",
        }
    }

    /// Classify a non-success HTTP status from the completion API.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => FailureKind::Authentication,
            429 => FailureKind::RateLimited,
            _ => FailureKind::Api,
        }
    }
}

/// Any failure of a completion call. `Display` is the bare detail message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct GenerationError {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedResponse, message)
    }

    /// The text displayed in place of generated material.
    pub fn display_text(&self) -> String {
        format!("{ERROR_PREFIX}{}", self.message)
    }
}

/// Reasons the form refuses to start a generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("OpenAI API 키를 입력하거나 secret 파일을 준비해 주세요.")]
    MissingCredential,

    #[error("학습 자료로 만들 요청을 입력하세요.")]
    EmptyRequest,
}
