use git_releases::boundary::BoundaryWarning;
use git_releases::cli::orchestration::{run_list_workflow_with, ListWorkflowArgs};
use git_releases::config::Config;
use git_releases::git::MockTagSource;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_tags_display() {
    let warning = BoundaryWarning::NoTags {
        location: "/tmp/project".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No version tags"),
        "Message should contain 'No version tags', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("/tmp/project"),
        "Message should contain the location, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_only_pre_releases_display() {
    let warning = BoundaryWarning::OnlyPreReleases {
        location: "origin.git".to_string(),
        hidden: 3,
    };
    assert_eq!(
        warning.to_string(),
        "Only pre-releases found in 'origin.git' (3 versions hidden)"
    );

    let single = BoundaryWarning::OnlyPreReleases {
        location: "origin.git".to_string(),
        hidden: 1,
    };
    assert!(single.to_string().contains("(1 version hidden)"));
}

// ============================================================================
// Workflow Boundary Tests
// ============================================================================

fn args(location: &str) -> ListWorkflowArgs {
    ListWorkflowArgs {
        location: location.to_string(),
        ..ListWorkflowArgs::default()
    }
}

#[test]
fn test_blank_output_reports_no_tags() {
    let source = MockTagSource::new(["", "   ", "\n"]);
    let result = run_list_workflow_with(&source, &args("blank"), &Config::default()).unwrap();

    assert!(result.versions.is_empty());
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::NoTags {
            location: "blank".to_string()
        }]
    );
}

#[test]
fn test_stable_repository_has_no_warnings() {
    let source = MockTagSource::new(["v1.0", "v1.1"]);
    let result = run_list_workflow_with(
        &source,
        &ListWorkflowArgs {
            stable_only: true,
            ..args("stable")
        },
        &Config::default(),
    )
    .unwrap();

    assert_eq!(result.versions.len(), 2);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_latest_of_empty_is_empty() {
    let source = MockTagSource::default();
    let result = run_list_workflow_with(
        &source,
        &ListWorkflowArgs {
            latest_only: true,
            ..args("empty")
        },
        &Config::default(),
    )
    .unwrap();

    assert!(result.versions.is_empty());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_lookup_failure_is_not_a_warning() {
    let source = MockTagSource::failing("fatal: repository not found");
    let err = run_list_workflow_with(&source, &args("gone.git"), &Config::default()).unwrap_err();

    assert!(format!("{:#}", err).contains("fatal: repository not found"));
}
