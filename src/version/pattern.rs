//! Patterns matching versions newer than a baseline
//!
//! Autodiscovery knows the version currently in use and the update policy
//! (`patch`, `minor`, `major`, ...). The generated pattern never widens
//! beyond that policy: a `patch` policy on `3.2.1` yields `3.2.x`, never a
//! new minor or major.

use crate::config::DEFAULT_LATEST_PATTERN;
use crate::version::constraint::Constraint;
use crate::version::error::{FilterError, VersionParseError};
use crate::version::filter::Filter;
use crate::version::kind::VersionKind;
use crate::version::semver::parse_version;

/// Returns a pattern that finds versions newer than `baseline` under `filter`
///
/// - latest: always `latest`
/// - regex: the filter pattern, regex policies are not widened
/// - semver: derived from the increment keyword held in the pattern
pub fn greater_than_pattern(filter: &Filter, baseline: &str) -> Result<String, FilterError> {
    match filter.kind {
        Some(VersionKind::Latest) => Ok(DEFAULT_LATEST_PATTERN.to_string()),
        Some(VersionKind::Regex) => Ok(filter.pattern.clone()),
        Some(VersionKind::Semver) => semver_pattern(&filter.pattern, baseline),
        kind => Err(FilterError::UnsupportedKind {
            kind: kind.map(|k| k.as_str()).unwrap_or_default().to_string(),
        }),
    }
}

fn semver_pattern(policy: &str, baseline: &str) -> Result<String, FilterError> {
    let pattern = match policy {
        "prerelease" => {
            let v = parse_version(baseline)?;
            let pre = if v.pre.is_empty() { "0" } else { v.pre.as_str() };
            format!(
                ">={}.{}.{}-{} <= {}.{}.{}",
                v.major, v.minor, v.patch, pre, v.major, v.minor, v.patch
            )
        }
        "patch" => {
            let v = parse_version(baseline)?;
            if v.pre.is_empty() {
                format!("{}.{}.x", v.major, v.minor)
            } else {
                format!("{}.{}.x-0", v.major, v.minor)
            }
        }
        "minor" => {
            let v = parse_version(baseline)?;
            if v.pre.is_empty() {
                format!("{}.x", v.major)
            } else {
                format!("{}.x.x-0", v.major)
            }
        }
        "minoronly" => {
            let v = parse_version(baseline)?;
            let next_major = v
                .major
                .checked_add(1)
                .ok_or_else(|| VersionParseError::Invalid(baseline.to_string()))?;
            if v.pre.is_empty() {
                format!("{} || >{}.{} < {}", baseline, v.major, v.minor, next_major)
            } else {
                format!("{} || >{}.{}.x-0 < {}", baseline, v.major, v.minor, next_major)
            }
        }
        "major" => {
            let v = parse_version(baseline)?;
            if v.pre.is_empty() {
                format!(">={}", v.major)
            } else {
                format!(">={}.x.x-0", v.major)
            }
        }
        "majoronly" => {
            let v = parse_version(baseline)?;
            if v.pre.is_empty() {
                format!("{} || >{}", baseline, v.major)
            } else {
                format!("{} || >{}", baseline, baseline)
            }
        }
        "" | "*" => match parse_version(baseline) {
            Ok(v) => format!(">={v}"),
            // The baseline may already be a constraint
            Err(_) => {
                Constraint::parse(baseline).map_err(|_| FilterError::IncorrectSemVerConstraint {
                    constraint: baseline.to_string(),
                })?;
                baseline.to_string()
            }
        },
        constraint => constraint.to_string(),
    };

    Ok(pattern)
}
