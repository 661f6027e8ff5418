//! # buildhooks-version
//!
//! Reads and rewrites the persisted version record (`version.properties`) and
//! bumps the project version by one patch level.

pub mod step;
pub mod store;

pub use step::BumpVersionStep;
pub use store::VersionStore;
