use crate::error::{ReleasesError, Result};
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Tags of a repository on the local filesystem
///
/// `git2::Repository` is `Send` but not `Sync`; the handle sits behind a
/// mutex so one source can be shared across threads.
pub struct LocalRepository {
    repo: Mutex<Git2Repo>,
    path: PathBuf,
}

impl LocalRepository {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ReleasesError::git_lookup(format!(
                "Not a git repository '{}': {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(LocalRepository {
            repo: Mutex::new(repo),
            path: path.to_path_buf(),
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        let path = repo.path().to_path_buf();
        LocalRepository {
            repo: Mutex::new(repo),
            path,
        }
    }
}

impl TagSource for LocalRepository {
    fn tag_lines(&self) -> Result<Vec<String>> {
        let repo = self.repo.lock().map_err(|_| {
            ReleasesError::git_lookup(format!(
                "Repository handle for '{}' is poisoned",
                self.path.display()
            ))
        })?;

        let tags = repo.tag_names(None).map_err(|e| {
            ReleasesError::git_lookup(format!(
                "Cannot list tags in '{}': {}",
                self.path.display(),
                e.message()
            ))
        })?;

        let lines: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        debug!(path = %self.path.display(), count = lines.len(), "listed local tags");

        Ok(lines)
    }
}
