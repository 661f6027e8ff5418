use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;

use crate::{Lifecycle, ProjectContext};

/// A named build step the host triggers at a fixed point of its lifecycle.
///
/// Steps are independent of each other: they share nothing but the files they
/// read and write and the [`ProjectContext`] they are handed.
#[async_trait]
pub trait Step: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn lifecycle(&self) -> Lifecycle;
    /// # Errors
    /// Returns error if the step fails; the pipeline stops at the first failure.
    async fn run(&self, context: &ProjectContext) -> Result<()>;
}

/// Ordered list of steps, run one at a time.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    #[must_use]
    pub fn new(steps: Vec<Box<dyn Step>>) -> Self {
        Self { steps }
    }

    /// Reorder by lifecycle phase, keeping the given order inside a phase
    #[must_use]
    pub fn ordered(mut self) -> Self {
        self.steps.sort_by_key(|step| step.lifecycle());
        self
    }

    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step in order; the first failure aborts the remaining steps.
    ///
    /// # Errors
    /// Returns the failing step's error, annotated with the step name.
    pub async fn run(&self, context: &ProjectContext) -> Result<()> {
        println!(
            "Plugin {} applied on {}",
            "buildhooks".bright_cyan().bold(),
            context.project_name().bright_white().bold()
        );
        for step in &self.steps {
            println!("{}", format!("> Task :{}", step.name()).bright_black());
            tracing::debug!(step = step.name(), lifecycle = %step.lifecycle(), "running step");
            step.run(context)
                .await
                .with_context(|| format!("Step `{}` failed", step.name()))?;
        }
        Ok(())
    }
}
