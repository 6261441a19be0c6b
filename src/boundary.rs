use std::fmt;

/// Warnings that occur when resolving versions from repository tags.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Repository has no tags at all
    NoTags { location: String },
    /// Every version found was a pre-release and was filtered out
    OnlyPreReleases { location: String, hidden: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTags { location } => {
                write!(f, "No version tags found in '{}'", location)
            }
            BoundaryWarning::OnlyPreReleases { location, hidden } => {
                let noun = if *hidden == 1 { "version" } else { "versions" };
                write!(
                    f,
                    "Only pre-releases found in '{}' ({} {} hidden)",
                    location, hidden, noun
                )
            }
        }
    }
}
