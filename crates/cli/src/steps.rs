use buildhooks_artifact::CopyDependenciesStep;
use buildhooks_core::Step;
use buildhooks_resources::ProcessResourcesStep;
use buildhooks_tree::PrintTreeStep;
use buildhooks_version::BumpVersionStep;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown step `{0}`, expected one of: {known}", known = step_names().join(", "))]
pub struct UnknownStep(pub String);

// step list

pub fn get_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(BumpVersionStep),
        Box::new(CopyDependenciesStep),
        Box::new(ProcessResourcesStep),
        Box::new(PrintTreeStep::default()),
    ]
}

pub fn step_names() -> Vec<&'static str> {
    get_steps().iter().map(|step| step.name()).collect()
}

/// Steps matching `names`, in the order given
///
/// # Errors
/// Returns `UnknownStep` for the first name that matches no step.
pub fn find_steps(names: &[String]) -> Result<Vec<Box<dyn Step>>, UnknownStep> {
    names
        .iter()
        .map(|name| {
            get_steps()
                .into_iter()
                .find(|step| step.name() == name.as_str())
                .ok_or_else(|| UnknownStep(name.clone()))
        })
        .collect()
}
