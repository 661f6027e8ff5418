use anyhow::Result;
use async_trait::async_trait;
use buildhooks_core::{Lifecycle, ProjectContext, Step};
use colored::Colorize;

use crate::VersionStore;

/// Bumps the patch level of the root project version and persists it
#[derive(Debug, Default)]
pub struct BumpVersionStep;

#[async_trait]
impl Step for BumpVersionStep {
    fn name(&self) -> &'static str {
        "bump-version"
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::OnDemand
    }

    async fn run(&self, context: &ProjectContext) -> Result<()> {
        let config = context.config();
        let store = VersionStore::new(context.resolve(&config.version_file), &config.version_key);
        let new_version = store.bump(context.version()).await?;
        println!("Bumped version to {}", new_version.to_string().bright_green().bold());
        Ok(())
    }
}
