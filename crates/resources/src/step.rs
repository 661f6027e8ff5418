use anyhow::Result;
use async_trait::async_trait;
use buildhooks_core::{HookError, Lifecycle, ProjectContext, Step};

use crate::{ResourceFilter, load_resources, write_resources};

/// Copies resources into the build output with the version placeholder filled in
#[derive(Debug, Default)]
pub struct ProcessResourcesStep;

#[async_trait]
impl Step for ProcessResourcesStep {
    fn name(&self) -> &'static str {
        "process-resources"
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::PrePackage
    }

    async fn run(&self, context: &ProjectContext) -> Result<()> {
        if context.version().is_empty() {
            return Err(HookError::VersionUnknown.into());
        }
        let config = context.config();
        let filter = ResourceFilter::new(
            &config.include_patterns,
            &config.exclude_name,
            &config.placeholder,
        )?;
        let resources = load_resources(&context.resolve(&config.resources_dir)).await?;
        let resources = filter.filter(resources, context.version());
        write_resources(&context.resolve(&config.resources_output_dir), &resources).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildhooks_core::Config;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_process_resources_step() {
        let temp_dir = TempDir::new().unwrap();
        let resources = temp_dir.path().join("src/main/resources");
        fs::create_dir_all(resources.join("config")).unwrap();
        fs::write(resources.join("application.yml"), "url: ${projectVersion}\n").unwrap();
        fs::write(resources.join("config/vault.yml"), "url: ${projectVersion}\n").unwrap();
        fs::write(resources.join("notes.txt"), "v${projectVersion}").unwrap();
        fs::write(resources.join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
        let context = ProjectContext::new(temp_dir.path(), Config::default()).with_version("1.2.3");

        ProcessResourcesStep.run(&context).await.unwrap();

        let out = temp_dir.path().join("build/resources/main");
        assert_eq!(
            fs::read_to_string(out.join("application.yml")).unwrap(),
            "url: 1.2.3\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("config/vault.yml")).unwrap(),
            "url: ${projectVersion}\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("notes.txt")).unwrap(),
            "v${projectVersion}"
        );
        assert_eq!(fs::read(out.join("logo.png")).unwrap(), [0x89, b'P', b'N', b'G']);
        assert_eq!(
            fs::read_to_string(resources.join("application.yml")).unwrap(),
            "url: ${projectVersion}\n"
        );
    }

    #[tokio::test]
    async fn test_process_resources_requires_version() {
        let temp_dir = TempDir::new().unwrap();
        let resources = temp_dir.path().join("src/main/resources");
        fs::create_dir_all(&resources).unwrap();
        fs::write(resources.join("application.yml"), "url: ${projectVersion}\n").unwrap();
        let context = ProjectContext::new(temp_dir.path(), Config::default());

        let error = ProcessResourcesStep.run(&context).await.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<HookError>(),
            Some(HookError::VersionUnknown)
        ));
        assert!(!temp_dir.path().join("build/resources/main").exists());
    }

    #[tokio::test]
    async fn test_process_resources_without_sources() {
        let temp_dir = TempDir::new().unwrap();
        let context = ProjectContext::new(temp_dir.path(), Config::default()).with_version("1.0.0");

        ProcessResourcesStep.run(&context).await.unwrap();

        assert!(!temp_dir.path().join("build/resources/main").exists());
    }
}
