use serde::{Deserialize, Serialize};

/// Loaded from `.buildhooks/config.json`, controls where each step reads and writes
/// and which names and patterns it matches.
///
/// Every field has a default, so a partial file (or no file at all) is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Key/value record holding the persisted version
    pub version_file: String,

    /// Key whose line is rewritten on bump
    pub version_key: String,

    /// Directory holding the resolved artifact set
    pub artifact_dir: String,

    /// Substring an artifact name must contain to be installed
    pub artifact_pattern: String,

    /// Directory the selected artifact is copied into
    pub artifact_dest_dir: String,

    /// File name the selected artifact is installed under
    pub artifact_rename: String,

    /// Resource root scanned by the filter pipeline
    pub resources_dir: String,

    /// Where processed resources are written
    pub resources_output_dir: String,

    /// Glob patterns (relative to the resource root) of text resources to rewrite
    pub include_patterns: Vec<String>,

    /// Resources whose file name contains this substring are never rewritten
    pub exclude_name: String,

    /// Literal token replaced by the project version
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version_file: "version.properties".to_string(),
            version_key: "version".to_string(),
            artifact_dir: "build/dependencies".to_string(),
            artifact_pattern: "opentelemetry-javaagent".to_string(),
            artifact_dest_dir: "src/main/jib".to_string(),
            artifact_rename: "opentelemetry-javaagent.jar".to_string(),
            resources_dir: "src/main/resources".to_string(),
            resources_output_dir: "build/resources/main".to_string(),
            include_patterns: ["**/*.properties", "**/*.yml", "**/*.yaml", "**/*.xml"]
                .map(str::to_string)
                .to_vec(),
            exclude_name: "vault".to_string(),
            placeholder: "${projectVersion}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version_key, "version");
        assert_eq!(config.artifact_rename, "opentelemetry-javaagent.jar");
        assert_eq!(config.include_patterns.len(), 4);
        assert_eq!(config.placeholder, "${projectVersion}");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"excludeName": "secret", "unknown": 1}"#).unwrap();
        assert_eq!(config.exclude_name, "secret");
        assert_eq!(config.version_file, "version.properties");
        assert_eq!(config.artifact_dest_dir, "src/main/jib");
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"includePatterns\""));
        assert!(json.contains("\"resourcesOutputDir\""));
    }
}
