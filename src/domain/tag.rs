use crate::domain::Version;
use crate::error::{ReleasesError, Result};

const REF_PREFIX: &str = "refs/";
const TAG_REF_PREFIX: &str = "refs/tags/";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Extract a tag from one line of tag lookup output
    ///
    /// Accepts bare tag names (`v1.2.3`), full refs (`refs/tags/v1.2.3`) and
    /// ls-remote style lines (`<sha>\trefs/tags/v1.2.3`). The name is the text
    /// after the last `refs/tags/`.
    ///
    /// # Errors
    /// `UnrecognizedTagFormat` when the line names a non-tag ref or the
    /// extracted name is empty. Bare names that merely contain `refs/`
    /// (`prefs/2.0`) are still tags.
    pub fn from_ref_line(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        // ls-remote lines carry `<sha>\t` before the ref
        let ref_part = trimmed
            .split_once('\t')
            .map_or(trimmed, |(_, reference)| reference.trim_start());

        let name = match trimmed.rsplit_once(TAG_REF_PREFIX) {
            Some((_, name)) => name,
            None if ref_part.starts_with(REF_PREFIX) => {
                return Err(ReleasesError::tag_format(line));
            }
            None => trimmed,
        };

        if name.is_empty() {
            return Err(ReleasesError::tag_format(line));
        }

        Ok(Tag::new(name))
    }

    /// Parse the tag name as a version
    pub fn version(&self) -> Result<Version> {
        Version::parse(&self.name)
    }
}
