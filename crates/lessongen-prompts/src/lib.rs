pub mod instruction;
pub mod message;

pub use instruction::{system_instruction, SECTION_TITLES};
pub use message::{build_messages, ChatMessage, Role};
