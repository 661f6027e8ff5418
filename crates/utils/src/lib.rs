mod clean_version;
mod get_buildhooks_config;
mod get_buildhooks_dir;
mod get_relative_path;
mod next_version;

pub use clean_version::clean_version;
pub use get_buildhooks_config::get_buildhooks_config;
pub use get_buildhooks_dir::get_buildhooks_dir;
pub use get_relative_path::get_relative_path;
pub use next_version::next_version;
