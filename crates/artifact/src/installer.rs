use std::path::{Path, PathBuf};

use buildhooks_core::{Artifact, HookError};
use tokio::fs::{copy, create_dir_all};

/// Copy `artifact` to `dest_dir/new_name`, creating `dest_dir` and replacing any
/// file already at the destination.
///
/// # Errors
/// Returns `Io` if the directory cannot be created or the copy fails.
pub async fn install_artifact(
    artifact: &Artifact,
    dest_dir: &Path,
    new_name: &str,
) -> Result<PathBuf, HookError> {
    create_dir_all(dest_dir)
        .await
        .map_err(|e| HookError::io(dest_dir, e))?;
    let dest = dest_dir.join(new_name);
    let bytes = copy(artifact.path(), &dest)
        .await
        .map_err(|e| HookError::io(artifact.path(), e))?;
    tracing::debug!(from = %artifact.path().display(), to = %dest.display(), bytes, "artifact copied");
    Ok(dest)
}
