use anyhow::Result;
use buildhooks_core::{Pipeline, ProjectContext};
use buildhooks_version::BumpVersionStep;
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Bump the patch version and rewrite the version record")]
pub struct BumpArgs {}

/// Bump the project version by one patch level
///
/// # Errors
/// Returns error if the version is malformed or the record cannot be rewritten.
pub async fn handle_bump(_args: &BumpArgs, context: &ProjectContext) -> Result<()> {
    Pipeline::new(vec![Box::new(BumpVersionStep)])
        .run(context)
        .await
}
