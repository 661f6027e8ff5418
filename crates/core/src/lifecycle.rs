use std::fmt::Display;

/// Point of the build at which a step runs. Ordering follows the build:
/// everything before compilation, then packaging, then on-demand tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lifecycle {
    PreCompile,
    PrePackage,
    OnDemand,
}

impl Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::PreCompile => "pre-compile",
                Self::PrePackage => "pre-package",
                Self::OnDemand => "on-demand",
            }
        )
    }
}
