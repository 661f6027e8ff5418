use std::path::{Path, PathBuf};

use crate::{Artifact, Config};

/// Everything the host hands to a step: where the project lives, its current
/// version, the resolved artifact set and the configuration.
///
/// Steps only read it; anything they change is written to disk.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    project_dir: PathBuf,
    project_name: String,
    version: String,
    artifacts: Vec<Artifact>,
    config: Config,
}

impl ProjectContext {
    pub fn new(project_dir: impl Into<PathBuf>, config: Config) -> Self {
        let project_dir = project_dir.into();
        let project_name = project_dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| project_dir.display().to_string());
        Self {
            project_dir,
            project_name,
            version: String::new(),
            artifacts: Vec::new(),
            config,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_artifacts(mut self, artifacts: Vec<Artifact>) -> Self {
        self.artifacts = artifacts;
        self
    }

    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Root project version as the host reports it, possibly quoted
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a configured path against the project directory
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.project_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_context_new() {
        let context = ProjectContext::new("/work/billing-service", Config::default())
            .with_version("1.2.3")
            .with_artifacts(vec![Artifact::from_path("/deps/a.jar")]);
        assert_eq!(context.project_name(), "billing-service");
        assert_eq!(context.version(), "1.2.3");
        assert_eq!(context.artifacts().len(), 1);
        assert_eq!(
            context.resolve("src/main/jib"),
            PathBuf::from("/work/billing-service/src/main/jib")
        );
    }

    #[test]
    fn test_project_context_defaults() {
        let context = ProjectContext::new("/work/app", Config::default());
        assert_eq!(context.version(), "");
        assert!(context.artifacts().is_empty());
        assert_eq!(context.project_dir(), Path::new("/work/app"));
    }
}
