use std::path::Path;

use anyhow::{Context, Result};
use buildhooks_artifact::resolve_artifacts;
use buildhooks_core::ProjectContext;
use buildhooks_utils::get_buildhooks_config;
use buildhooks_version::VersionStore;

/// Assemble what the steps receive: configuration, the project version and the
/// resolved artifact set.
///
/// The version comes from `project_version` when given, otherwise from the
/// version record.
///
/// # Errors
/// Returns error if the project directory does not exist or the configuration,
/// version record or artifact directory cannot be read.
pub async fn build_project_context(
    project_dir: &Path,
    project_version: Option<&str>,
) -> Result<ProjectContext> {
    let project_dir = tokio::fs::canonicalize(project_dir)
        .await
        .with_context(|| format!("Project directory not found: {}", project_dir.display()))?;
    let config = get_buildhooks_config(&project_dir).await?;

    let version = match project_version {
        Some(version) => Some(version.to_string()),
        None => {
            VersionStore::new(project_dir.join(&config.version_file), &config.version_key)
                .current()
                .await?
        }
    };
    let artifacts = resolve_artifacts(&project_dir.join(&config.artifact_dir)).await?;

    let context = ProjectContext::new(&project_dir, config).with_artifacts(artifacts);
    Ok(match version {
        Some(version) => context.with_version(version),
        None => {
            tracing::warn!("project version unknown, steps that need it will fail");
            context
        }
    })
}
