use lessongen_core::Difficulty;
use serde::{Deserialize, Serialize};

use crate::instruction::system_instruction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// System instruction followed by the teacher's request, untouched.
pub fn build_messages(difficulty: Difficulty, request: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: Role::System,
            content: system_instruction(difficulty),
        },
        ChatMessage {
            role: Role::User,
            content: request.to_string(),
        },
    ]
}
