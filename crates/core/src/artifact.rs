use std::path::{Path, PathBuf};

/// A resolved dependency file: the name it is displayed under and where its bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    path: PathBuf,
}

impl Artifact {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Artifact named after the final component of `path`
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { name, path }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_from_path() {
        let artifact = Artifact::from_path("/deps/opentelemetry-javaagent-2.1.jar");
        assert_eq!(artifact.name(), "opentelemetry-javaagent-2.1.jar");
        assert_eq!(
            artifact.path(),
            Path::new("/deps/opentelemetry-javaagent-2.1.jar")
        );
    }

    #[test]
    fn test_artifact_new_keeps_display_name() {
        let artifact = Artifact::new("agent.jar", "/cache/ab12/file");
        assert_eq!(artifact.name(), "agent.jar");
        assert_eq!(artifact.path(), Path::new("/cache/ab12/file"));
    }
}
