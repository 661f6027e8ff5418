//! # buildhooks-core
//!
//! Core types and traits for buildhooks.
//!
//! Holds the data model shared by the step crates (versions, version records,
//! artifacts, resource files, directory snapshots), the [`HookError`] taxonomy,
//! the [`Config`] loaded from `.buildhooks/config.json`, and the [`Step`] trait
//! with the [`Pipeline`] that runs steps in lifecycle order.

pub mod artifact;
pub mod config;
pub mod context;
pub mod directory_node;
pub mod error;
pub mod lifecycle;
pub mod resource_file;
pub mod step;
pub mod version;
pub mod version_record;

pub use artifact::Artifact;
pub use config::Config;
pub use context::ProjectContext;
pub use directory_node::DirectoryNode;
pub use error::HookError;
pub use lifecycle::Lifecycle;
pub use resource_file::ResourceFile;
pub use step::{Pipeline, Step};
pub use version::Version;
pub use version_record::VersionRecord;
