//! Guess a filter from an existing version value
//!
//! Autodiscovery only sees the value currently in use (an image tag, a
//! dependency version). When no filter is configured, the closest policy is
//! derived from the shape of that value:
//! - `1.2.3` - strict semver
//! - `v1.2`, `1` - semver
//! - `1.2.3-alpine`, `2.235+jdk11` - regex keeping the same shape and suffix

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::DEFAULT_LATEST_PATTERN;
use crate::version::filter::Filter;
use crate::version::kind::VersionKind;
use crate::version::semver::parse_strict_version;

static PLAIN_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?\d+(\.\d+){0,2}$").expect("plain version regex is valid"));

static SUFFIXED_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?\d+((?:\.\d+){0,2})([+-].+)$").expect("suffixed version regex is valid")
});

/// Returns the closest filter for `value`, or `None` when its shape is unknown
pub fn infer_filter(value: &str) -> Option<Filter> {
    if value.is_empty() || value == DEFAULT_LATEST_PATTERN {
        debug!("No filter can be inferred from {:?}", value);
        return None;
    }

    if let Ok(version) = parse_strict_version(value) {
        if version.pre.is_empty() && version.build.is_empty() {
            return Some(Filter {
                kind: Some(VersionKind::Semver),
                strict: true,
                ..Default::default()
            });
        }
    }

    if PLAIN_VERSION.is_match(value) {
        return Some(Filter {
            kind: Some(VersionKind::Semver),
            ..Default::default()
        });
    }

    if let Some(captures) = SUFFIXED_VERSION.captures(value) {
        let components = captures[1].matches('.').count();
        let (separator, rest) = captures[2].split_at(1);
        let separator = if separator == "+" { r"\+" } else { "-" };
        let suffix = format!("{separator}{}", regex::escape(rest));
        let pattern = if components == 0 {
            format!(r"^v?\d*{suffix}$")
        } else {
            format!(r"^v?\d*(\.\d*){{{components}}}{suffix}$")
        };

        debug!("Closest regex {:?} inferred from {:?}", pattern, value);
        return Some(Filter::new(VersionKind::Regex, pattern));
    }

    debug!("No filter can be inferred from {:?}", value);
    None
}
