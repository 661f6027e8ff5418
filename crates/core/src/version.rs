use std::fmt::Display;
use std::str::FromStr;

use crate::HookError;

/// A `major.minor.patch` version without pre-release or build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Next version under the fixed policy: patch + 1, major and minor untouched.
    ///
    /// `None` when the patch component is already at its maximum.
    #[must_use]
    pub const fn bump_patch(self) -> Option<Self> {
        match self.patch.checked_add(1) {
            Some(patch) => Some(Self::new(self.major, self.minor, patch)),
            None => None,
        }
    }
}

impl FromStr for Version {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split('.').collect::<Vec<&str>>();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(HookError::MalformedVersion(s.to_string()));
        };
        let component = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(HookError::MalformedVersion(s.to_string()));
            }
            part.parse::<u64>()
                .map_err(|_| HookError::MalformedVersion(s.to_string()))
        };
        Ok(Self::new(
            component(*major)?,
            component(*minor)?,
            component(*patch)?,
        ))
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
