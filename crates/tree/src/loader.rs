use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use buildhooks_core::{DirectoryNode, HookError};
use tokio::fs::{read_dir, symlink_metadata};

/// Snapshot the subtree at `path`, children in the order the file system lists them.
///
/// Returns `None` when nothing exists at `path`. Symbolic links are not followed.
/// Entries removed while the walk is in progress are left out of the snapshot.
///
/// # Errors
/// Returns `Io` if an entry cannot be inspected or a directory cannot be listed.
pub async fn load_tree(path: &Path) -> Result<Option<DirectoryNode>, HookError> {
    load_node(path.to_path_buf()).await
}

type NodeFuture = Pin<Box<dyn Future<Output = Result<Option<DirectoryNode>, HookError>> + Send>>;

fn load_node(path: PathBuf) -> NodeFuture {
    Box::pin(async move {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let metadata = match symlink_metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(HookError::io(&path, e)),
        };
        if !metadata.is_dir() {
            return Ok(Some(DirectoryNode::file(name)));
        }

        let mut entries = match read_dir(&path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(HookError::io(&path, e)),
        };
        let mut children = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| HookError::io(&path, e))?
        {
            if let Some(child) = load_node(entry.path()).await? {
                children.push(child);
            }
        }
        Ok(Some(DirectoryNode::directory(name, children)))
    })
}
