use anyhow::Result;
use buildhooks_core::{Pipeline, ProjectContext};
use buildhooks_resources::ProcessResourcesStep;
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Copy resources to the build output, filling in the project version")]
pub struct ProcessResourcesArgs {}

/// Filter resources into the output directory
///
/// # Errors
/// Returns error if an include pattern is invalid or a resource cannot be read or written.
pub async fn handle_process_resources(
    _args: &ProcessResourcesArgs,
    context: &ProjectContext,
) -> Result<()> {
    Pipeline::new(vec![Box::new(ProcessResourcesStep)])
        .run(context)
        .await
}
