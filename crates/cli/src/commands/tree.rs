use std::path::PathBuf;

use anyhow::Result;
use buildhooks_core::{Pipeline, ProjectContext};
use buildhooks_tree::PrintTreeStep;
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Print a directory structure")]
pub struct TreeArgs {
    /// Directory to print, relative to the project directory (default: the project directory)
    pub path: Option<PathBuf>,

    /// Sort entries by name instead of file system listing order
    #[arg(long, default_value = "false")]
    pub sorted: bool,
}

/// Print the directory tree
///
/// # Errors
/// Returns error if the path is not a directory or cannot be read.
pub async fn handle_tree(args: &TreeArgs, context: &ProjectContext) -> Result<()> {
    Pipeline::new(vec![Box::new(PrintTreeStep::new(
        args.path.clone(),
        args.sorted,
    ))])
    .run(context)
    .await
}
