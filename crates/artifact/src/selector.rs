use buildhooks_core::{Artifact, HookError};

/// First artifact, in the order given, whose name contains `pattern` (case-sensitive).
///
/// When several artifacts match, the earlier one wins; the match is not checked
/// for uniqueness.
///
/// # Errors
/// Returns `ArtifactNotFound` when no name contains `pattern`.
pub fn select_artifact<'a>(artifacts: &'a [Artifact], pattern: &str) -> Result<&'a Artifact, HookError> {
    let mut matches = artifacts
        .iter()
        .filter(|artifact| artifact.name().contains(pattern));
    let selected = matches
        .next()
        .ok_or_else(|| HookError::ArtifactNotFound(pattern.to_string()))?;
    let skipped = matches.count();
    if skipped > 0 {
        tracing::warn!(
            pattern,
            selected = selected.name(),
            skipped,
            "several artifacts match, using the first"
        );
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts(names: &[&str]) -> Vec<Artifact> {
        names
            .iter()
            .map(|name| Artifact::new(*name, format!("/deps/{name}")))
            .collect()
    }

    #[test]
    fn test_select_single_match() {
        let artifacts = artifacts(&["a-1.0.jar", "opentelemetry-javaagent-2.1.jar", "b.jar"]);
        let selected = select_artifact(&artifacts, "opentelemetry-javaagent").unwrap();
        assert_eq!(selected, &artifacts[1]);
    }

    #[test]
    fn test_select_first_of_many() {
        let artifacts = artifacts(&[
            "opentelemetry-javaagent-2.1.jar",
            "opentelemetry-javaagent-1.9.jar",
        ]);
        let selected = select_artifact(&artifacts, "opentelemetry-javaagent").unwrap();
        assert_eq!(selected.name(), "opentelemetry-javaagent-2.1.jar");
    }

    #[test]
    fn test_select_is_case_sensitive() {
        let artifacts = artifacts(&["OpenTelemetry-JavaAgent.jar"]);
        assert!(matches!(
            select_artifact(&artifacts, "opentelemetry-javaagent"),
            Err(HookError::ArtifactNotFound(_))
        ));
    }

    #[test]
    fn test_select_no_match() {
        let artifacts = artifacts(&["a-1.0.jar", "b.jar"]);
        let error = select_artifact(&artifacts, "opentelemetry-javaagent").unwrap_err();
        assert!(matches!(error, HookError::ArtifactNotFound(p) if p == "opentelemetry-javaagent"));
    }

    #[test]
    fn test_select_empty_set() {
        assert!(select_artifact(&[], "anything").is_err());
    }
}
