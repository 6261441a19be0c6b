//! Tag lookup abstraction layer
//!
//! Release resolution only needs one thing from git: the list of tag names
//! of a repository, one per line. This module hides where those lines come
//! from behind the [TagSource] trait.
//!
//! # Overview
//!
//! - [repository::LocalRepository]: tags of a repository on disk, via `git2`
//! - [remote::RemoteRepository]: tags advertised by a remote, like `git ls-remote --tags`
//! - [mock::MockTagSource]: fixed output for tests
//!
//! [RepositoryLocation] picks the right implementation for a user supplied
//! location string.
//!
//! ```rust
//! # use git_releases::git::{MockTagSource, TagSource};
//! let source = MockTagSource::new(["1.0.0", "1.1.0"]);
//! assert_eq!(source.tag_lines().unwrap().len(), 2);
//! ```

pub mod mock;
pub mod remote;
pub mod repository;

pub use mock::MockTagSource;
pub use remote::RemoteRepository;
pub use repository::LocalRepository;

use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// Source of raw tag lookup output
///
/// ## Thread Safety
///
/// Implementors must be `Send + Sync` so a source can be shared across threads.
///
/// ## Error Handling
///
/// Lookup failures are reported as [crate::error::ReleasesError::GitLookupFailed];
/// callers pass them through unchanged.
pub trait TagSource: Send + Sync {
    /// Raw lookup output, one entry per line
    ///
    /// Entries may be bare tag names (`v1.0.0`) or full refs
    /// (`refs/tags/v1.0.0`). Blank entries are allowed and ignored by callers.
    fn tag_lines(&self) -> Result<Vec<String>>;
}

impl<T: TagSource + ?Sized> TagSource for Box<T> {
    fn tag_lines(&self) -> Result<Vec<String>> {
        (**self).tag_lines()
    }
}

/// Where to look up tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryLocation {
    /// Repository on the local filesystem
    Local(PathBuf),
    /// Remote repository URL (anything ending in `.git`)
    Remote(String),
}

impl RepositoryLocation {
    /// Classify a location string
    ///
    /// A location ending in `.git` is treated as a remote URL. Anything else
    /// is a local path; a leading `file://` is stripped.
    pub fn parse(location: &str) -> Self {
        if location.ends_with(".git") {
            RepositoryLocation::Remote(location.to_string())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            RepositoryLocation::Local(PathBuf::from(path))
        }
    }

    /// Open the tag source for this location
    pub fn open(&self) -> Result<Box<dyn TagSource>> {
        match self {
            RepositoryLocation::Local(path) => Ok(Box::new(LocalRepository::open(path)?)),
            RepositoryLocation::Remote(url) => Ok(Box::new(RemoteRepository::new(url.clone()))),
        }
    }
}

impl fmt::Display for RepositoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryLocation::Local(path) => write!(f, "{}", path.display()),
            RepositoryLocation::Remote(url) => write!(f, "{}", url),
        }
    }
}
