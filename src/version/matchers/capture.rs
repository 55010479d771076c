//! Capture matcher for `regex/semver` and `regex/time`
//!
//! A value is extracted from each candidate with the first capture group of
//! the regex (or the whole match when the regex has no group), then the inner
//! matcher picks a winner among the extracted values. The winner keeps the
//! candidate it was extracted from as its original version.

use regex::Regex;
use tracing::trace;

use crate::version::error::FilterError;
use crate::version::kind::VersionKind;
use crate::version::matcher::VersionMatcher;
use crate::version::matchers::{SemverMatcher, TimeMatcher};
use crate::version::types::Match;

pub struct CaptureMatcher {
    kind: VersionKind,
    regex: Regex,
    inner: Box<dyn VersionMatcher>,
}

impl CaptureMatcher {
    /// `regex/semver`: `constraint` applies to the captured values
    pub fn semver(regex: &str, constraint: &str, strict: bool) -> Result<Self, FilterError> {
        Ok(Self {
            kind: VersionKind::RegexSemver,
            regex: Regex::new(regex)?,
            inner: Box::new(SemverMatcher::new(constraint, strict)?),
        })
    }

    /// `regex/time`: captured values are parsed with `layout`
    pub fn time(regex: &str, layout: &str) -> Result<Self, FilterError> {
        Ok(Self {
            kind: VersionKind::RegexTime,
            regex: Regex::new(regex)?,
            inner: Box::new(TimeMatcher::new(layout)?),
        })
    }

    fn extract<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        let captures = self.regex.captures(candidate)?;
        let group = if self.regex.captures_len() > 1 { 1 } else { 0 };
        captures.get(group).map(|m| m.as_str())
    }
}

impl VersionMatcher for CaptureMatcher {
    fn kind(&self) -> VersionKind {
        self.kind
    }

    fn find(&self, candidates: &[&str]) -> Result<Match, FilterError> {
        if candidates.is_empty() {
            return Err(FilterError::NoVersionsFound);
        }

        let (origins, values): (Vec<usize>, Vec<&str>) = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let value = self.extract(candidate);
                trace!("Extracted {:?} from candidate {:?}", value, candidate);
                value.map(|value| (index, value))
            })
            .unzip();

        if values.is_empty() {
            return Err(FilterError::NoVersionFoundForPattern {
                pattern: self.regex.as_str().to_string(),
            });
        }

        let found = self.inner.find(&values)?;
        Ok(Match {
            index: origins[found.index],
            parsed: found.parsed,
        })
    }
}
