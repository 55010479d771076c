//! Autodiscovery flow: infer or configure a policy, derive a newer-than
//! pattern from the version in use, then search with a fresh filter.

mod helper;

use rstest::rstest;

use helper::MockRegistry;
use version_filter::{Filter, VersionKind};

fn registry() -> MockRegistry {
    MockRegistry::new()
        .with_versions(
            "nginx",
            vec!["1.24.0", "1.25.0", "1.25.3", "1.26.0", "2.0.0"],
        )
        .with_versions(
            "temurin",
            vec!["17.0-jdk11", "17.1-jdk11", "17.1-jdk17", "18.0-jdk11"],
        )
}

#[rstest]
#[case("patch", "1.25.0", "1.25.3")]
#[case("minor", "1.25.0", "1.26.0")]
#[case("minoronly", "1.25.0", "1.26.0")]
#[case("major", "1.25.0", "2.0.0")]
#[case("majoronly", "1.25.0", "2.0.0")]
#[case("*", "1.25.0", "2.0.0")]
fn generated_filter_follows_policy(
    #[case] policy: &str,
    #[case] baseline: &str,
    #[case] expected: &str,
) {
    let policy = Filter::new(VersionKind::Semver, policy);
    let pattern = policy.greater_than_pattern(baseline).unwrap();

    let generated = Filter::new(VersionKind::Semver, pattern).init().unwrap();
    let found = generated
        .search(&registry().fetch_all_versions("nginx"))
        .unwrap();

    assert_eq!(found.original_version, expected);
}

#[test]
fn inferred_filter_keeps_suffix() {
    let filter = Filter::from_value("17.0-jdk11").unwrap().init().unwrap();
    let pattern = filter.greater_than_pattern("17.0-jdk11").unwrap();

    let found = Filter::new(VersionKind::Regex, pattern)
        .search(&registry().fetch_all_versions("temurin"))
        .unwrap();

    assert_eq!(found.original_version, "18.0-jdk11");
}

#[test]
fn inferred_strict_filter_searches_semver() {
    let filter = Filter::from_value("1.24.0").unwrap().init().unwrap();

    assert_eq!(filter.kind, Some(VersionKind::Semver));
    assert_eq!(filter.pattern, "*");

    let found = filter
        .search(&registry().fetch_all_versions("nginx"))
        .unwrap();
    assert_eq!(found.parsed_version, "2.0.0");
}
