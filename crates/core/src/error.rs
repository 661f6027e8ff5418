use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the build hook operations.
///
/// Every variant is fatal to the operation that produced it. Steps wrap these in
/// `anyhow::Error`, so callers holding an `anyhow::Error` can recover the variant
/// with `downcast_ref::<HookError>()`.
#[derive(Debug, Error)]
pub enum HookError {
    /// The version string does not split into exactly three numeric components
    #[error("malformed version `{0}`, expected major.minor.patch")]
    MalformedVersion(String),

    #[error("version record not found: {}", .0.display())]
    RecordNotFound(PathBuf),

    /// No line of the record starts with the version key; the record is left untouched
    #[error("no line starting with `{key}` in {}", .path.display())]
    KeyNotFound { key: String, path: PathBuf },

    /// Neither the host nor the version record supplied a project version
    #[error("project version unknown, pass --project-version or add it to the version record")]
    VersionUnknown,

    #[error("no artifact name contains `{0}`")]
    ArtifactNotFound(String),

    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An include pattern is not a valid glob
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),
}

impl HookError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
