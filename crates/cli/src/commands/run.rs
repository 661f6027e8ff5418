use anyhow::Result;
use buildhooks_core::{Pipeline, ProjectContext};
use clap::Args;

use crate::steps::find_steps;

#[derive(Args, Debug)]
#[command(about = "Run named steps in lifecycle order")]
pub struct RunArgs {
    /// Steps to run: bump-version, copy-dependencies, process-resources, print-tree
    #[arg(required = true)]
    pub steps: Vec<String>,
}

/// Run the named steps, pre-compile steps first, stopping at the first failure
///
/// # Errors
/// Returns error if a step name is unknown or a step fails.
pub async fn handle_run(args: &RunArgs, context: &ProjectContext) -> Result<()> {
    let steps = find_steps(&args.steps)?;
    Pipeline::new(steps).ordered().run(context).await
}
