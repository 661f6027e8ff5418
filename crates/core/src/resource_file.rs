use std::path::{Path, PathBuf};

/// A packaged resource: its path relative to the resource root and its raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    relative_path: PathBuf,
    content: Vec<u8>,
}

impl ResourceFile {
    pub fn new(relative_path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// File name without its directories, used by the exclusion check
    #[must_use]
    pub fn name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as text, `None` when it is not valid UTF-8
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) {
        self.content = content.into();
    }
}
