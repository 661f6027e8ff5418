/// Line-oriented `key=value` record such as `version.properties`.
///
/// Lines are kept verbatim, comments and blanks included, so a rewrite only
/// changes the single line that is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRecord {
    lines: Vec<String>,
}

impl VersionRecord {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.trim().starts_with(key))
    }

    /// Value of the first line whose trimmed text starts with `key`
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        let line = &self.lines[self.position(key)?];
        line.split_once('=').map(|(_, value)| value.trim())
    }

    /// Replace the first line starting with `key` by `key=value`.
    ///
    /// Returns `false` and leaves the record untouched when no line matches.
    pub fn replace(&mut self, key: &str, value: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.lines[index] = format!("{key}={value}");
                true
            }
            None => false,
        }
    }

    /// Newline-joined content, without a trailing newline
    #[must_use]
    pub fn to_content(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "# managed by the release job\n\n  version=1.2.3\ngroup=hr.axion\nversion=9.9.9";

    #[test]
    fn test_parse_keeps_every_line() {
        let record = VersionRecord::parse(RECORD);
        assert_eq!(record.lines().len(), 5);
        assert_eq!(record.lines()[1], "");
        assert_eq!(record.lines()[2], "  version=1.2.3");
    }

    #[test]
    fn test_value_reads_first_match() {
        let record = VersionRecord::parse(RECORD);
        assert_eq!(record.value("version"), Some("1.2.3"));
        assert_eq!(record.value("group"), Some("hr.axion"));
        assert_eq!(record.value("missing"), None);
    }

    #[test]
    fn test_replace_only_first_match() {
        let mut record = VersionRecord::parse(RECORD);
        assert!(record.replace("version", "1.2.4"));
        assert_eq!(
            record.to_content(),
            "# managed by the release job\n\nversion=1.2.4\ngroup=hr.axion\nversion=9.9.9"
        );
    }

    #[test]
    fn test_replace_missing_key_is_noop() {
        let mut record = VersionRecord::parse("group=hr.axion\n# comment");
        assert!(!record.replace("version", "1.0.0"));
        assert_eq!(record.to_content(), "group=hr.axion\n# comment");
    }

    #[test]
    fn test_to_content_drops_trailing_newline() {
        let record = VersionRecord::parse("version=0.0.1\n");
        assert_eq!(record.to_content(), "version=0.0.1");
    }
}
