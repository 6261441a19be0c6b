//! Pre-release detection and helpers over collections of versions
//!
//! A version counts as a pre-release when its suffix contains one of the
//! recognized identifiers. Matching is plain substring containment, so a
//! suffix like `"-alphabetical"` is treated as a pre-release too.

use crate::domain::Version;

/// Identifiers that mark a suffix as a pre-release
pub const PRE_RELEASE_IDENTIFIERS: [&str; 7] =
    ["alpha", "a", "beta", "b", "pre", "prerelease", "rc"];

impl Version {
    /// Whether this version's suffix marks it as a pre-release.
    /// Versions without a suffix are never pre-releases.
    pub fn is_pre_release(&self) -> bool {
        match self.suffix() {
            Some(suffix) => PRE_RELEASE_IDENTIFIERS
                .iter()
                .any(|identifier| suffix.contains(identifier)),
            None => false,
        }
    }
}

/// Copy of `versions` without pre-releases, in the original order
pub fn without_pre_releases(versions: &[Version]) -> Vec<Version> {
    versions
        .iter()
        .filter(|version| !version.is_pre_release())
        .cloned()
        .collect()
}

/// Convenience operations on slices of versions
pub trait VersionSliceExt {
    /// Drop pre-release versions, keeping order
    fn without_pre_releases(&self) -> Vec<Version>;

    /// Stable sort by version ordering; equal versions keep their relative order
    fn sorted(&self) -> Vec<Version>;

    /// Highest version by ordering. On ties the later entry wins.
    fn latest(&self) -> Option<&Version>;
}

impl VersionSliceExt for [Version] {
    fn without_pre_releases(&self) -> Vec<Version> {
        without_pre_releases(self)
    }

    fn sorted(&self) -> Vec<Version> {
        let mut versions = self.to_vec();
        versions.sort();
        versions
    }

    fn latest(&self) -> Option<&Version> {
        self.iter().max()
    }
}
