use anyhow::Result;
use async_trait::async_trait;
use buildhooks_core::{Lifecycle, ProjectContext, Step};
use buildhooks_utils::get_relative_path;
use colored::Colorize;

use crate::{install_artifact, select_artifact};

/// Installs the configured artifact ahead of compilation.
///
/// A failure here must stop the build, since compilation depends on the copied file.
#[derive(Debug, Default)]
pub struct CopyDependenciesStep;

#[async_trait]
impl Step for CopyDependenciesStep {
    fn name(&self) -> &'static str {
        "copy-dependencies"
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::PreCompile
    }

    async fn run(&self, context: &ProjectContext) -> Result<()> {
        let config = context.config();
        let artifact = select_artifact(context.artifacts(), &config.artifact_pattern)?;
        let dest = install_artifact(
            artifact,
            &context.resolve(&config.artifact_dest_dir),
            &config.artifact_rename,
        )
        .await?;
        println!(
            "Copied {} {} {}",
            artifact.name().bright_white().bold(),
            "→".bright_cyan(),
            get_relative_path(context.project_dir(), &dest).bright_black()
        );
        Ok(())
    }
}
