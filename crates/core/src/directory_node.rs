/// Snapshot of a file system entry and, for directories, its children in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    name: String,
    children: Option<Vec<DirectoryNode>>,
}

impl DirectoryNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<DirectoryNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.children.is_some()
    }

    /// Children in listing order; empty for files
    #[must_use]
    pub fn children(&self) -> &[DirectoryNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Sort every level of the subtree lexically by name
    pub fn sort(&mut self) {
        if let Some(children) = self.children.as_mut() {
            children.sort_by(|a, b| a.name.cmp(&b.name));
            children.iter_mut().for_each(Self::sort);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_has_no_children() {
        let node = DirectoryNode::file("a.txt");
        assert!(!node.is_dir());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_empty_directory_is_dir() {
        let node = DirectoryNode::directory("empty", vec![]);
        assert!(node.is_dir());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_sort_is_recursive() {
        let mut node = DirectoryNode::directory(
            "root",
            vec![
                DirectoryNode::file("b.txt"),
                DirectoryNode::directory(
                    "a",
                    vec![DirectoryNode::file("z"), DirectoryNode::file("y")],
                ),
            ],
        );
        node.sort();
        let names = node
            .children()
            .iter()
            .map(DirectoryNode::name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b.txt"]);
        assert_eq!(node.children()[0].children()[0].name(), "y");
    }
}
