//! # buildhooks-tree
//!
//! Renders a directory subtree with box-drawing connectors, for diagnostics:
//!
//! ```text
//! ├── main
//! │   └── resources
//! └── test
//! ```

pub mod loader;
pub mod render;
pub mod step;

pub use loader::load_tree;
pub use render::{render, render_path};
pub use step::PrintTreeStep;
