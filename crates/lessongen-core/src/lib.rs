pub mod credential;
pub mod difficulty;
pub mod error;
pub mod export;
pub mod form;
pub mod material;

pub use credential::Credential;
pub use difficulty::Difficulty;
pub use error::{FailureKind, FormError, GenerationError, ERROR_PREFIX};
pub use export::MarkdownExport;
pub use form::{FormState, GenerationRequest, Phase};
pub use material::{Material, Outcome};
