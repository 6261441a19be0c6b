use thiserror::Error;

/// Unified error type for release resolution
#[derive(Error, Debug)]
pub enum ReleasesError {
    /// Tags could not be resolved for a given repository
    #[error("Failed to look up releases using Git. Error message: {0}")]
    GitLookupFailed(String),

    /// A ref line did not contain a usable tag name
    #[error("Encountered a tag with an unrecognized format: '{0}'")]
    UnrecognizedTagFormat(String),

    /// A dot-delimited version component never yielded an integer
    #[error("Encountered a version component with an unrecognized format: '{0}'")]
    UnrecognizedVersionComponentFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Versions could not be rendered for output
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Convenience type alias for Results in git-releases
pub type Result<T> = std::result::Result<T, ReleasesError>;

impl ReleasesError {
    /// Create a git lookup error with context
    pub fn git_lookup(msg: impl Into<String>) -> Self {
        ReleasesError::GitLookupFailed(msg.into())
    }

    /// Create a tag format error for the offending line
    pub fn tag_format(line: impl Into<String>) -> Self {
        ReleasesError::UnrecognizedTagFormat(line.into())
    }

    /// Create a version component error for the offending component
    pub fn component(component: impl Into<String>) -> Self {
        ReleasesError::UnrecognizedVersionComponentFormat(component.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleasesError::Config(msg.into())
    }
}

impl From<git2::Error> for ReleasesError {
    fn from(err: git2::Error) -> Self {
        ReleasesError::GitLookupFailed(err.message().to_string())
    }
}

impl PartialEq for ReleasesError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
