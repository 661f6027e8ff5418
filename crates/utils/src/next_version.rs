use buildhooks_core::{HookError, Version};

use crate::clean_version;

/// Parse the root project version and return the one after it (patch + 1).
///
/// # Errors
/// Returns `HookError::MalformedVersion` unless the version has exactly three numeric
/// components and its patch can still be incremented.
pub fn next_version(version: &str) -> Result<Version, HookError> {
    let current = clean_version(version).parse::<Version>()?;
    current
        .bump_patch()
        .ok_or_else(|| HookError::MalformedVersion(version.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", "1.2.4")]
    #[case("0.0.9", "0.0.10")]
    #[case("\"2.7.0\"", "2.7.1")]
    #[case("10.0.99", "10.0.100")]
    fn test_next_version(#[case] current: &str, #[case] expected: &str) {
        assert_eq!(next_version(current).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("1.2")]
    #[case("1.2.3.4")]
    #[case("v1.2.3")]
    #[case("1.2.x")]
    #[case("")]
    #[case("1.2.18446744073709551615")]
    fn test_next_version_malformed(#[case] current: &str) {
        assert!(matches!(
            next_version(current),
            Err(HookError::MalformedVersion(_))
        ));
    }

    #[test]
    fn test_next_version_keeps_major_minor() {
        for (major, minor, patch) in [(0, 0, 0), (1, 9, 4), (7, 0, 12)] {
            let next = next_version(&format!("{major}.{minor}.{patch}")).unwrap();
            assert_eq!(next, Version::new(major, minor, patch + 1));
        }
    }
}
