pub const EXPORT_FILENAME: &str = "learning_material.md";
pub const EXPORT_MIME: &str = "text/markdown";

/// A download payload for the displayed material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExport {
    body: String,
}

impl MarkdownExport {
    /// Wraps the displayed string as-is.
    pub fn new(displayed: &str) -> Self {
        Self {
            body: displayed.to_string(),
        }
    }

    pub fn filename(&self) -> &'static str {
        EXPORT_FILENAME
    }

    pub fn mime(&self) -> &'static str {
        EXPORT_MIME
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{EXPORT_FILENAME}\"")
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body.into_bytes()
    }
}
