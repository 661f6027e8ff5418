use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use buildhooks_core::{HookError, Version, VersionRecord};
use buildhooks_utils::next_version;
use tokio::fs::{read_to_string, rename, write};

/// On-disk `key=value` version record.
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
    key: String,
}

impl VersionStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    /// Returns `RecordNotFound` if the file is missing, `Io` for any other read failure.
    pub async fn read(&self) -> Result<VersionRecord, HookError> {
        match read_to_string(&self.path).await {
            Ok(content) => Ok(VersionRecord::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(HookError::RecordNotFound(self.path.clone()))
            }
            Err(e) => Err(HookError::io(&self.path, e)),
        }
    }

    /// Replace the record file with `record`'s content.
    ///
    /// The content goes to a sibling temporary file first and is renamed over the
    /// record, so readers never observe a half-written record.
    ///
    /// # Errors
    /// Returns `Io` if writing or renaming fails.
    pub async fn write(&self, record: &VersionRecord) -> Result<(), HookError> {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let temp_path = self.path.with_file_name(format!(".{file_name}.tmp"));
        write(&temp_path, record.to_content())
            .await
            .map_err(|e| HookError::io(&temp_path, e))?;
        rename(&temp_path, &self.path)
            .await
            .map_err(|e| HookError::io(&self.path, e))
    }

    /// Value stored under the version key, if the record exists and has one.
    ///
    /// # Errors
    /// Returns `Io` if the record exists but cannot be read.
    pub async fn current(&self) -> Result<Option<String>, HookError> {
        match self.read().await {
            Ok(record) => Ok(record.value(&self.key).map(str::to_string)),
            Err(HookError::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Compute the next version from `root_version` and put it into `record`.
    ///
    /// # Errors
    /// Returns `MalformedVersion` or `KeyNotFound`.
    pub fn bump_record(
        &self,
        mut record: VersionRecord,
        root_version: &str,
    ) -> Result<(VersionRecord, Version), HookError> {
        let new_version = next_version(root_version)?;
        if !record.replace(&self.key, &new_version.to_string()) {
            return Err(HookError::KeyNotFound {
                key: self.key.clone(),
                path: self.path.clone(),
            });
        }
        Ok((record, new_version))
    }

    /// Bump `root_version` by one patch level and persist it in the record.
    ///
    /// Nothing is written unless every check passes.
    ///
    /// # Errors
    /// Returns `MalformedVersion`, `RecordNotFound`, `KeyNotFound` or `Io`.
    pub async fn bump(&self, root_version: &str) -> Result<Version, HookError> {
        let record = self.read().await?;
        let (record, new_version) = self.bump_record(record, root_version)?;
        self.write(&record).await?;
        tracing::info!(path = %self.path.display(), version = %new_version, "version record rewritten");
        Ok(new_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(content: Option<&str>) -> (TempDir, VersionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version.properties");
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        let store = VersionStore::new(path, "version");
        (temp_dir, store)
    }

    #[tokio::test]
    async fn test_bump_rewrites_version_line() {
        let (_temp_dir, store) = store_with(Some("version=1.2.3\n"));
        let new_version = store.bump("1.2.3").await.unwrap();
        assert_eq!(new_version, Version::new(1, 2, 4));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "version=1.2.4");
    }

    #[tokio::test]
    async fn test_bump_preserves_other_lines() {
        let (_temp_dir, store) = store_with(Some(
            "# release train\n\ngroup=hr.axion\n  version = 0.0.9\nversionCode=3\nname=api\n",
        ));
        store.bump("0.0.9").await.unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "# release train\n\ngroup=hr.axion\nversion=0.0.10\nversionCode=3\nname=api"
        );
    }

    #[tokio::test]
    async fn test_bump_uses_root_version_not_record() {
        let (_temp_dir, store) = store_with(Some("version=5.5.5"));
        let new_version = store.bump("\"1.0.0\"").await.unwrap();
        assert_eq!(new_version.to_string(), "1.0.1");
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "version=1.0.1");
    }

    #[tokio::test]
    async fn test_bump_missing_record() {
        let (_temp_dir, store) = store_with(None);
        let result = store.bump("1.0.0").await;
        assert!(matches!(result, Err(HookError::RecordNotFound(_))));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_bump_missing_key_leaves_file_unchanged() {
        let (_temp_dir, store) = store_with(Some("group=hr.axion\n"));
        let result = store.bump("1.0.0").await;
        assert!(matches!(result, Err(HookError::KeyNotFound { .. })));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "group=hr.axion\n");
    }

    #[tokio::test]
    async fn test_bump_malformed_version_leaves_file_unchanged() {
        let (_temp_dir, store) = store_with(Some("version=1.2\n"));
        let result = store.bump("1.2").await;
        assert!(matches!(result, Err(HookError::MalformedVersion(_))));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "version=1.2\n");
    }

    #[tokio::test]
    async fn test_bump_patch_overflow_leaves_file_unchanged() {
        let (_temp_dir, store) = store_with(Some("version=1.2.3\n"));
        let result = store.bump("1.2.18446744073709551615").await;
        assert!(matches!(result, Err(HookError::MalformedVersion(_))));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "version=1.2.3\n");
    }

    #[tokio::test]
    async fn test_bump_leaves_no_temp_file() {
        let (temp_dir, store) = store_with(Some("version=1.0.0"));
        store.bump("1.0.0").await.unwrap();
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn test_current() {
        let (_temp_dir, store) = store_with(Some("# c\nversion=3.1.4\n"));
        assert_eq!(store.current().await.unwrap(), Some("3.1.4".to_string()));

        let (_temp_dir, missing) = store_with(None);
        assert_eq!(missing.current().await.unwrap(), None);
    }

    #[test]
    fn test_bump_record_is_pure() {
        let store = VersionStore::new("version.properties", "version");
        let record = VersionRecord::parse("a=1\nversion=2.0.0\nb=2");
        let (record, new_version) = store.bump_record(record, "2.0.0").unwrap();
        assert_eq!(new_version, Version::new(2, 0, 1));
        assert_eq!(record.to_content(), "a=1\nversion=2.0.1\nb=2");
    }
}
