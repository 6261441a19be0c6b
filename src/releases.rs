//! Resolving released versions from tag lookup output

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{Tag, Version, VersionSliceExt};
use crate::error::Result;
use crate::git::{RepositoryLocation, TagSource};

/// What to do with a tag whose name is not a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidTagPolicy {
    /// Fail the whole resolution on the first unparsable tag
    #[default]
    Abort,
    /// Log a warning and leave the tag out
    Skip,
}

/// Options controlling [resolve_versions]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub invalid_tags: InvalidTagPolicy,
    /// Stable sort by version; otherwise keep lookup order
    pub sort: bool,
    pub include_pre_releases: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            invalid_tags: InvalidTagPolicy::Abort,
            sort: true,
            include_pre_releases: true,
        }
    }
}

/// Resolve the released versions listed by a tag source
///
/// Blank lines are ignored. Every other line must name a tag; tag names are
/// parsed in lookup order and unparsable ones are handled according to
/// `options.invalid_tags`. Lookup errors from the source are returned as is.
pub fn resolve_versions<S: TagSource + ?Sized>(
    source: &S,
    options: &ResolveOptions,
) -> Result<Vec<Version>> {
    let lines = source.tag_lines()?;
    let mut versions = Vec::with_capacity(lines.len());

    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        let parsed = Tag::from_ref_line(line).and_then(|tag| tag.version());

        match (parsed, options.invalid_tags) {
            (Ok(version), _) => versions.push(version),
            (Err(e), InvalidTagPolicy::Abort) => return Err(e),
            (Err(e), InvalidTagPolicy::Skip) => {
                warn!(tag = %line.trim(), error = %e, "skipping tag");
            }
        }
    }

    debug!(parsed = versions.len(), lines = lines.len(), "parsed tag versions");

    if options.sort {
        versions = versions.sorted();
    }

    if !options.include_pre_releases {
        versions = versions.without_pre_releases();
    }

    Ok(versions)
}

/// Resolve the released versions of the repository at `location`
/// with default options, sorted ascending
///
/// `location` is either a remote URL ending in `.git` or a local path.
pub fn versions_for(location: &str) -> Result<Vec<Version>> {
    let location = RepositoryLocation::parse(location);
    info!(%location, "resolving versions");
    let source = location.open()?;
    resolve_versions(&source, &ResolveOptions::default())
}
