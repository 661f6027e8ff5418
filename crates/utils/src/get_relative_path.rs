use std::path::Path;

/// Display form of `path` relative to the project directory (`./src/main/jib/agent.jar`),
/// or the path unchanged when it lies outside of it.
pub fn get_relative_path(project_dir: &Path, path: &Path) -> String {
    match path.strip_prefix(project_dir) {
        Ok(relative) => format!("./{}", relative.to_string_lossy()),
        Err(_) => path.display().to_string(),
    }
}
