use std::path::Path;

use buildhooks_core::{DirectoryNode, HookError};

use crate::load_tree;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// One line per descendant of `root`, depth first, children in their stored order.
///
/// `root` itself is not printed; its children are the top level of the tree.
#[must_use]
pub fn render(root: &DirectoryNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_children(root, "", &mut lines);
    lines
}

fn render_children(node: &DirectoryNode, indent: &str, lines: &mut Vec<String>) {
    let children = node.children();
    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{indent}{connector}{}", child.name()));
        if child.is_dir() {
            let child_indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
            render_children(child, &format!("{indent}{child_indent}"), lines);
        }
    }
}

/// Load and render the directory at `path`.
///
/// Nothing at `path` renders nothing. With `sorted`, every level is ordered by
/// name instead of listing order.
///
/// # Errors
/// Returns `InvalidDirectory` if `path` exists but is not a directory, `Io` if it
/// cannot be read.
pub async fn render_path(path: &Path, sorted: bool) -> Result<Vec<String>, HookError> {
    let Some(mut root) = load_tree(path).await? else {
        tracing::debug!(path = %path.display(), "nothing to render");
        return Ok(Vec::new());
    };
    if !root.is_dir() {
        return Err(HookError::InvalidDirectory(path.to_path_buf()));
    }
    if sorted {
        root.sort();
    }
    Ok(render(&root))
}
