use crate::error::{ReleasesError, Result};
use crate::git::TagSource;

/// Mock tag source for testing without actual git operations
pub struct MockTagSource {
    lines: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a source that yields the given lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            lines: lines.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a source whose lookup always fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            lines: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Add another output line
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl TagSource for MockTagSource {
    fn tag_lines(&self) -> Result<Vec<String>> {
        match &self.failure {
            Some(message) => Err(ReleasesError::git_lookup(message.clone())),
            None => Ok(self.lines.clone()),
        }
    }
}
