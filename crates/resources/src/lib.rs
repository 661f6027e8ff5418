//! # buildhooks-resources
//!
//! Copies the resource tree into the build output during packaging, replacing the
//! `${projectVersion}` placeholder in text resources selected by glob patterns.
//! Files whose name contains the exclusion marker (`vault` by default) are copied
//! untouched.

pub mod filter;
pub mod resource_set;
pub mod step;

pub use filter::ResourceFilter;
pub use resource_set::{load_resources, write_resources};
pub use step::ProcessResourcesStep;
