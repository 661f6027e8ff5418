use anyhow::Result;
use buildhooks_artifact::CopyDependenciesStep;
use buildhooks_core::{Pipeline, ProjectContext};
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Copy the matching resolved artifact to its fixed install location")]
pub struct CopyDependenciesArgs {}

/// Install the configured artifact
///
/// # Errors
/// Returns error if no artifact matches or the copy fails.
pub async fn handle_copy_dependencies(
    _args: &CopyDependenciesArgs,
    context: &ProjectContext,
) -> Result<()> {
    Pipeline::new(vec![Box::new(CopyDependenciesStep)])
        .run(context)
        .await
}
