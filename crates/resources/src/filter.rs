use std::path::{Component, Path};

use buildhooks_core::{HookError, ResourceFile};
use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Placeholder substitution over a resource set.
///
/// A resource is a candidate when its relative path matches one of the include
/// patterns. Candidates whose file name contains the exclusion marker are left
/// as they are; every other candidate has each literal occurrence of the
/// placeholder replaced. Resources outside the include patterns are never touched.
///
/// Include patterns must only select text resources. Candidates that are not
/// valid UTF-8 are passed through unchanged.
#[derive(Debug, Clone)]
pub struct ResourceFilter {
    include: Vec<Pattern>,
    exclude_name: String,
    placeholder: String,
}

impl ResourceFilter {
    /// # Errors
    /// Returns `InvalidPattern` if an include pattern is not a valid glob.
    pub fn new(
        include_patterns: &[String],
        exclude_name: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Result<Self, HookError> {
        let include = include_patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|e| HookError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.msg.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            include,
            exclude_name: exclude_name.into(),
            placeholder: placeholder.into(),
        })
    }

    /// Whether `relative_path` matches at least one include pattern
    #[must_use]
    pub fn is_included(&self, relative_path: &Path) -> bool {
        let path = to_slash(relative_path);
        self.include
            .iter()
            .any(|pattern| pattern.matches_with(&path, MATCH_OPTIONS))
    }

    #[must_use]
    pub fn is_excluded(&self, file_name: &str) -> bool {
        !self.exclude_name.is_empty() && file_name.contains(&self.exclude_name)
    }

    /// Replace the placeholder on every line of `text`, keeping line endings as they are
    #[must_use]
    pub fn substitute(&self, text: &str, replacement: &str) -> String {
        if self.placeholder.is_empty() {
            return text.to_string();
        }
        text.split_inclusive('\n')
            .map(|line| line.replace(&self.placeholder, replacement))
            .collect()
    }

    /// Run the filter over `resources`, returning the set with candidates rewritten.
    ///
    /// Prints `processResource > {name}` for every included resource, excluded ones too.
    #[must_use]
    pub fn filter(&self, resources: Vec<ResourceFile>, replacement: &str) -> Vec<ResourceFile> {
        resources
            .into_iter()
            .map(|mut resource| {
                if !self.is_included(resource.relative_path()) {
                    return resource;
                }
                let name = resource.name();
                println!("processResource > {name}");
                if self.is_excluded(&name) {
                    tracing::debug!(%name, "excluded from placeholder substitution");
                    return resource;
                }
                match resource.text() {
                    Some(text) => {
                        let rewritten = self.substitute(text, replacement);
                        resource.set_content(rewritten);
                    }
                    None => tracing::warn!(
                        path = %resource.relative_path().display(),
                        "resource is not UTF-8 text, copied unchanged"
                    ),
                }
                resource
            })
            .collect()
    }
}

fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
