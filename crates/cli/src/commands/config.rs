use anyhow::Result;
use buildhooks_core::ProjectContext;
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Show the effective buildhooks configuration")]
pub struct ConfigArgs {}

/// Display buildhooks configuration
///
/// # Errors
/// Returns error if serializing the configuration fails.
pub async fn handle_config(_args: &ConfigArgs, context: &ProjectContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(context.config())?);
    Ok(())
}
