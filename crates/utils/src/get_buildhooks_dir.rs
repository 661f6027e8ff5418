use std::path::{Path, PathBuf};

pub fn get_buildhooks_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(".buildhooks")
}
