//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the resolution workflow so the
//! workflow can be driven programmatically without depending on clap.

use anyhow::{Context, Result};
use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{Version, VersionSliceExt};
use crate::git::{RepositoryLocation, TagSource};
use crate::releases::{resolve_versions, InvalidTagPolicy, ResolveOptions};

/// Arguments for the list workflow
///
/// Mirrors the CLI Args. Flags only ever tighten what the config file
/// asks for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListWorkflowArgs {
    /// Repository path or remote URL
    pub location: String,

    /// Drop pre-release versions
    pub stable_only: bool,

    /// Only report the latest version
    pub latest_only: bool,

    /// Skip tags that are not versions instead of failing
    pub skip_invalid: bool,

    /// Keep the order tags were listed in
    pub unsorted: bool,
}

/// Result of a successful list workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Location the versions were resolved from
    pub location: String,

    /// Resolved versions, after filtering
    pub versions: Vec<Version>,

    /// Non-fatal issues worth showing to the user
    pub warnings: Vec<BoundaryWarning>,
}

/// Merge config file settings with CLI flags
pub fn resolve_options(args: &ListWorkflowArgs, config: &Config) -> ResolveOptions {
    let mut options = ResolveOptions::from(&config.resolve);

    if args.stable_only {
        options.include_pre_releases = false;
    }
    if args.skip_invalid {
        options.invalid_tags = InvalidTagPolicy::Skip;
    }
    if args.unsorted {
        options.sort = false;
    }

    options
}

/// Main list workflow
///
/// 1. Classify the location and open its tag source
/// 2. Resolve versions from the tags
/// 3. Apply pre-release and latest filtering
pub fn run_list_workflow(args: &ListWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let location = RepositoryLocation::parse(&args.location);
    info!(%location, "opening tag source");

    let source = location
        .open()
        .with_context(|| format!("Failed to open '{}'", args.location))?;

    run_list_workflow_with(&source, args, config)
}

/// List workflow over an already opened tag source
pub fn run_list_workflow_with<S: TagSource + ?Sized>(
    source: &S,
    args: &ListWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let options = resolve_options(args, config);

    // Resolve with pre-releases so we can tell "no tags" from "only pre-releases"
    let all = resolve_versions(
        source,
        &ResolveOptions {
            include_pre_releases: true,
            ..options.clone()
        },
    )
    .with_context(|| format!("Failed to resolve versions for '{}'", args.location))?;

    let mut warnings = Vec::new();
    let mut versions = if options.include_pre_releases {
        all.clone()
    } else {
        all.without_pre_releases()
    };

    if all.is_empty() {
        warnings.push(BoundaryWarning::NoTags {
            location: args.location.clone(),
        });
    } else if versions.is_empty() {
        warnings.push(BoundaryWarning::OnlyPreReleases {
            location: args.location.clone(),
            hidden: all.len(),
        });
    }

    if args.latest_only {
        versions = versions.latest().cloned().into_iter().collect();
    }

    info!(count = versions.len(), "resolved versions");

    Ok(WorkflowResult {
        location: args.location.clone(),
        versions,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolveConfig;
    use crate::error::ReleasesError;
    use crate::git::MockTagSource;

    fn args() -> ListWorkflowArgs {
        ListWorkflowArgs {
            location: "mock".to_string(),
            ..ListWorkflowArgs::default()
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let options = resolve_options(
            &ListWorkflowArgs {
                stable_only: true,
                skip_invalid: true,
                unsorted: true,
                ..args()
            },
            &config,
        );
        assert!(!options.include_pre_releases);
        assert!(!options.sort);
        assert_eq!(options.invalid_tags, InvalidTagPolicy::Skip);
    }

    #[test]
    fn test_config_respected_without_flags() {
        let config = Config {
            resolve: ResolveConfig {
                include_pre_releases: false,
                ..ResolveConfig::default()
            },
            ..Config::default()
        };
        assert!(!resolve_options(&args(), &config).include_pre_releases);
    }

    #[test]
    fn test_latest_stable() {
        let source = MockTagSource::new(["1.0.0", "1.1.0", "2.0-beta"]);
        let result = run_list_workflow_with(
            &source,
            &ListWorkflowArgs {
                stable_only: true,
                latest_only: true,
                ..args()
            },
            &Config::default(),
        )
        .unwrap();

        assert_eq!(result.versions, vec![Version::new(1, 1, 0)]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_tags_warning() {
        let source = MockTagSource::default();
        let result = run_list_workflow_with(&source, &args(), &Config::default()).unwrap();

        assert!(result.versions.is_empty());
        assert_eq!(
            result.warnings,
            vec![BoundaryWarning::NoTags {
                location: "mock".to_string()
            }]
        );
    }

    #[test]
    fn test_only_pre_releases_warning() {
        let source = MockTagSource::new(["1.0-alpha", "1.0-beta"]);
        let result = run_list_workflow_with(
            &source,
            &ListWorkflowArgs {
                stable_only: true,
                ..args()
            },
            &Config::default(),
        )
        .unwrap();

        assert!(result.versions.is_empty());
        assert_eq!(
            result.warnings,
            vec![BoundaryWarning::OnlyPreReleases {
                location: "mock".to_string(),
                hidden: 2
            }]
        );
    }

    #[test]
    fn test_parse_error_keeps_cause() {
        let source = MockTagSource::new(["1.0", "Clearly not a version"]);
        let err = run_list_workflow_with(&source, &args(), &Config::default()).unwrap_err();

        assert!(err.to_string().contains("Failed to resolve versions for 'mock'"));
        assert_eq!(
            err.downcast_ref::<ReleasesError>(),
            Some(&ReleasesError::component("Clearly not a version"))
        );
    }
}
