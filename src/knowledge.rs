// src/knowledge.rs
use crate::error::StartupError;
use std::path::{Path, PathBuf};

/// Markers the health probe reports on, so a wrong or truncated document is
/// visible without reading logs.
pub const FARM_NAME_MARKER: &str = "Braastad";
pub const FARM_ADDRESS_MARKER: &str = "Oppdalslinna";

/// The static text the model is allowed to answer from. Loaded once and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct KnowledgeDocument {
    path: PathBuf,
    text: String,
}

impl KnowledgeDocument {
    /// Read the document verbatim from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(StartupError::KnowledgeMissing(path));
        }

        let text = std::fs::read_to_string(&path).map_err(|source| StartupError::KnowledgeUnreadable {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, text })
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length in UTF-16 code units, matching what the browser-side tooling
    /// reports for the same file.
    pub fn len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn has_farm_name(&self) -> bool {
        self.contains(FARM_NAME_MARKER)
    }

    pub fn has_farm_address(&self) -> bool {
        self.contains(FARM_ADDRESS_MARKER)
    }
}
