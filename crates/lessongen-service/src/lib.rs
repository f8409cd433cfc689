mod client;
mod generate;
mod mock;
mod openai;
mod secrets;

pub use client::{CompletionClient, CompletionRequest, GenerationSettings};
pub use generate::{generate_display_text, generate_material};
pub use mock::MockCompletion;
pub use openai::{OpenAiClient, DEFAULT_BASE_URL};
pub use secrets::{resolve_credential, SecretStore, SecretsError};
