use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use buildhooks_core::{Lifecycle, ProjectContext, Step};
use colored::Colorize;

use crate::render_path;

/// Prints the directory structure under `path` (the project directory when unset)
#[derive(Debug, Default)]
pub struct PrintTreeStep {
    path: Option<PathBuf>,
    sorted: bool,
}

impl PrintTreeStep {
    #[must_use]
    pub const fn new(path: Option<PathBuf>, sorted: bool) -> Self {
        Self { path, sorted }
    }

    fn root(&self, context: &ProjectContext) -> PathBuf {
        match &self.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => context.project_dir().join(path),
            None => context.project_dir().to_path_buf(),
        }
    }
}

#[async_trait]
impl Step for PrintTreeStep {
    fn name(&self) -> &'static str {
        "print-tree"
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::OnDemand
    }

    async fn run(&self, context: &ProjectContext) -> Result<()> {
        let root = self.root(context);
        let lines = render_path(&root, self.sorted).await?;
        if root.exists() {
            println!("{}", root.display().to_string().bold());
        }
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}
