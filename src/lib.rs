pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod releases;
pub mod ui;

pub use domain::{without_pre_releases, Version, VersionSliceExt};
pub use error::{ReleasesError, Result};
pub use releases::{resolve_versions, versions_for, InvalidTagPolicy, ResolveOptions};
