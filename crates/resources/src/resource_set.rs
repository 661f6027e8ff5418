use std::path::Path;

use buildhooks_core::{HookError, ResourceFile};
use ignore::WalkBuilder;
use tokio::fs::{create_dir_all, read, write};

/// Every file under `root`, with paths relative to it, in file name order.
///
/// Hidden files and files listed in ignore files are included: the resource tree
/// is packaged as it is. A missing root is an empty set.
///
/// # Errors
/// Returns `InvalidDirectory` if `root` exists but is not a directory, `Io` if the
/// tree cannot be walked or a file cannot be read.
pub async fn load_resources(root: &Path) -> Result<Vec<ResourceFile>, HookError> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    if !root.is_dir() {
        return Err(HookError::InvalidDirectory(root.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            files.push(entry.into_path());
        }
    }

    let mut resources = Vec::with_capacity(files.len());
    for path in files {
        let content = read(&path).await.map_err(|e| HookError::io(&path, e))?;
        let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        resources.push(ResourceFile::new(relative_path, content));
    }
    tracing::debug!(root = %root.display(), count = resources.len(), "loaded resources");
    Ok(resources)
}

fn walk_error(root: &Path, error: ignore::Error) -> HookError {
    let message = error.to_string();
    let source = error
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    HookError::io(root, source)
}

/// Write each resource under `root`, creating directories and replacing existing files.
///
/// # Errors
/// Returns `Io` if a directory cannot be created or a file cannot be written.
pub async fn write_resources(root: &Path, resources: &[ResourceFile]) -> Result<(), HookError> {
    for resource in resources {
        let dest = root.join(resource.relative_path());
        if let Some(parent) = dest.parent() {
            create_dir_all(parent)
                .await
                .map_err(|e| HookError::io(parent, e))?;
        }
        write(&dest, resource.content())
            .await
            .map_err(|e| HookError::io(&dest, e))?;
    }
    Ok(())
}
