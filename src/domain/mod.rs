//! Domain logic - pure version rules independent of git operations

pub mod prerelease;
pub mod tag;
pub mod version;

pub use prerelease::{without_pre_releases, VersionSliceExt, PRE_RELEASE_IDENTIFIERS};
pub use tag::Tag;
pub use version::Version;
