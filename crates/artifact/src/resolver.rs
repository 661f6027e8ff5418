use std::io::ErrorKind;
use std::path::Path;

use buildhooks_core::{Artifact, HookError};
use tokio::fs::read_dir;

/// Regular files directly inside `dir`, sorted by name.
///
/// A missing directory is an empty set: nothing has been resolved yet.
///
/// # Errors
/// Returns `Io` if the directory exists but cannot be listed.
pub async fn resolve_artifacts(dir: &Path) -> Result<Vec<Artifact>, HookError> {
    let mut entries = match read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(HookError::io(dir, e)),
    };
    let mut artifacts = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| HookError::io(dir, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| HookError::io(entry.path(), e))?;
        if file_type.is_file() {
            artifacts.push(Artifact::from_path(entry.path()));
        }
    }
    artifacts.sort_by(|a, b| a.name().cmp(b.name()));
    tracing::debug!(dir = %dir.display(), count = artifacts.len(), "resolved artifacts");
    Ok(artifacts)
}
