// tests/version_test.rs
use git_releases::{without_pre_releases, ReleasesError, Version, VersionSliceExt};
use std::cmp::Ordering;

#[test]
fn test_unbox_style_tags() {
    let tags = ["1.0", "1.1", "1.2", "1.2.1", "2.0.0-beta.1", "2.0.0"];
    let versions: Vec<Version> = tags.iter().map(|t| t.parse().unwrap()).collect();

    assert_eq!(versions[0], Version::from_major(1));
    assert_eq!(versions[1], Version::from_major_minor(1, 1));
    assert_eq!(versions[3], Version::new(1, 2, 1));
    assert_eq!(versions[4].suffix(), Some("-beta.1"));
    assert_eq!(versions.without_pre_releases().latest(), Some(&Version::new(2, 0, 0)));
}

#[test]
fn test_ordering_matches_componentwise_comparison() {
    let versions: Vec<Version> = ["0.9.9", "1", "1.0.1", "1.1", "v1.1.1-rc", "1.10", "2"]
        .iter()
        .map(|t| Version::parse(t).unwrap())
        .collect();

    for (i, a) in versions.iter().enumerate() {
        for (j, b) in versions.iter().enumerate() {
            let expected = (a.major(), a.minor(), a.patch()).cmp(&(b.major(), b.minor(), b.patch()));
            assert_eq!(a.cmp(b), expected, "{} vs {}", a, b);
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_prefix_and_suffix_never_break_ties() {
    let a = Version::parse("v2.0.0").unwrap();
    let b = Version::parse("release-2.0.0-rc1").unwrap();
    assert_eq!(a.cmp(&b), Ordering::Equal);
    assert_ne!(a, b);
}

#[test]
fn test_filter_out_pre_releases() {
    let versions = vec![
        Version::new(1, 0, 0),
        Version::new(1, 0, 0).with_suffix("-beta"),
        Version::new(2, 0, 0).with_suffix("-rc1"),
    ];
    assert_eq!(without_pre_releases(&versions), vec![Version::new(1, 0, 0)]);
}

#[test]
fn test_batch_parse_stops_at_first_failure() {
    let tags = ["1.0", "Clearly not a version", "", "2.0"];
    let result: Result<Vec<Version>, ReleasesError> = tags.iter().map(|t| t.parse()).collect();

    assert_eq!(
        result.unwrap_err(),
        ReleasesError::UnrecognizedVersionComponentFormat("Clearly not a version".to_string())
    );
}

#[test]
fn test_marker_is_normalized_not_preserved() {
    let v = Version::parse("v3.0.6^{}").unwrap();
    assert_eq!(v.to_string(), "v3.0.6");
    assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
}
