//! # buildhooks-artifact
//!
//! Finds one artifact in the resolved dependency set by name and copies it to a
//! fixed location before compilation, e.g. the OpenTelemetry Java agent into
//! `src/main/jib/opentelemetry-javaagent.jar`.

pub mod installer;
pub mod resolver;
pub mod selector;
pub mod step;

pub use installer::install_artifact;
pub use resolver::resolve_artifacts;
pub use selector::select_artifact;
pub use step::CopyDependenciesStep;
