use std::path::Path;

use lessongen_core::Credential;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("read secrets file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse secrets file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct OpenAiSection {
    api_key: Option<String>,
}

/// Read-only key/value secrets, loaded from a TOML file:
///
/// ```toml
/// [openai]
/// api_key = "sk-..."
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SecretStore {
    #[serde(default)]
    openai: OpenAiSection,
}

impl SecretStore {
    pub fn parse(text: &str) -> Result<Self, SecretsError> {
        Ok(toml::from_str(text)?)
    }

    /// Strict load. A missing file is an empty store.
    pub fn try_load(path: &Path) -> Result<Self, SecretsError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no secrets file");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Lenient load: unreadable or malformed files count as empty.
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), "ignoring secrets file: {e}");
            Self::default()
        })
    }

    /// The `openai.api_key` entry, if set and non-blank.
    pub fn openai_api_key(&self) -> Option<Credential> {
        self.openai.api_key.as_deref().and_then(Credential::new)
    }
}

/// Stored secret first, otherwise whatever was typed into the form.
pub fn resolve_credential(store: &SecretStore, form_input: &str) -> Option<Credential> {
    store
        .openai_api_key()
        .or_else(|| Credential::new(form_input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_namespaced_key() {
        let store = SecretStore::parse("[openai]\napi_key = \"sk-stored\"\n").unwrap();
        assert_eq!(store.openai_api_key().unwrap().expose(), "sk-stored");
    }

    #[test]
    fn blank_key_is_absent() {
        let store = SecretStore::parse("[openai]\napi_key = \"  \"\n").unwrap();
        assert!(store.openai_api_key().is_none());
    }

    #[test]
    fn missing_section_is_absent() {
        let store = SecretStore::parse("[other]\nx = 1\n").unwrap();
        assert!(store.openai_api_key().is_none());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SecretStore::try_load(&dir.path().join("secrets.toml")).unwrap();
        assert!(store.openai_api_key().is_none());
    }

    #[test]
    fn malformed_file_is_empty_when_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "[openai\napi_key = ").unwrap();
        assert!(SecretStore::try_load(&path).is_err());
        assert!(SecretStore::load(&path).openai_api_key().is_none());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "[openai]\napi_key = \"sk-file\"\n").unwrap();
        assert_eq!(
            SecretStore::load(&path).openai_api_key().unwrap().expose(),
            "sk-file"
        );
    }

    #[test]
    fn resolve_prefers_store() {
        let store = SecretStore::parse("[openai]\napi_key = \"sk-stored\"\n").unwrap();
        let c = resolve_credential(&store, "sk-typed").unwrap();
        assert_eq!(c.expose(), "sk-stored");
    }

    #[test]
    fn resolve_falls_back_to_form() {
        let store = SecretStore::default();
        assert_eq!(
            resolve_credential(&store, " sk-typed ").unwrap().expose(),
            "sk-typed"
        );
        assert!(resolve_credential(&store, "").is_none());
    }
}
