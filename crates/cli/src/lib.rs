use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{
        BumpArgs, ConfigArgs, CopyDependenciesArgs, ProcessResourcesArgs, RunArgs, TreeArgs,
        handle_bump, handle_config, handle_copy_dependencies, handle_process_resources,
        handle_run, handle_tree,
    },
    context::build_project_context,
    logging::init_logging,
};
pub mod commands;
pub mod context;
mod logging;
pub mod steps;

pub use steps::UnknownStep;

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Project directory the configured paths are resolved against
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project_dir: PathBuf,

    /// Root project version (default: read from the version record)
    #[arg(long, global = true)]
    project_version: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, default_value = "false")]
    quiet: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "buildhooks",
    author,
    version,
    about = "Build lifecycle steps: version bump, artifact install, resource filtering, tree printing",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Bump(BumpArgs),
    CopyDependencies(CopyDependenciesArgs),
    ProcessResources(ProcessResourcesArgs),
    Tree(TreeArgs),
    Run(RunArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if the project context cannot be built or the command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    init_logging(cli.global.verbose, cli.global.quiet);
    let context =
        build_project_context(&cli.global.project_dir, cli.global.project_version.as_deref())
            .await?;
    match cli.command {
        Commands::Bump(args) => handle_bump(&args, &context).await?,
        Commands::CopyDependencies(args) => handle_copy_dependencies(&args, &context).await?,
        Commands::ProcessResources(args) => handle_process_resources(&args, &context).await?,
        Commands::Tree(args) => handle_tree(&args, &context).await?,
        Commands::Run(args) => handle_run(&args, &context).await?,
        Commands::Config(args) => handle_config(&args, &context).await?,
    }
    Ok(())
}
