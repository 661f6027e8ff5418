mod bump;
mod config;
mod copy_dependencies;
mod process_resources;
mod run;
mod tree;

pub use bump::BumpArgs;
pub use bump::handle_bump;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use copy_dependencies::CopyDependenciesArgs;
pub use copy_dependencies::handle_copy_dependencies;
pub use process_resources::ProcessResourcesArgs;
pub use process_resources::handle_process_resources;
pub use run::RunArgs;
pub use run::handle_run;
pub use tree::TreeArgs;
pub use tree::handle_tree;
