//! Version filter: policy normalization and search dispatch

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{
    DEFAULT_LATEST_PATTERN, DEFAULT_REGEX_PATTERN, DEFAULT_SEMVER_PATTERN, FilterConfig,
};
use crate::version::error::FilterError;
use crate::version::kind::VersionKind;
use crate::version::matcher::VersionMatcher;
use crate::version::matchers::{
    CaptureMatcher, LatestMatcher, RegexMatcher, SemverMatcher, TimeMatcher,
};
use crate::version::types::{CandidateOrder, Version};
use crate::version::{infer, pattern};

/// Declarative policy selecting one version among candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FilterConfig", into = "FilterConfig")]
pub struct Filter {
    /// Version kind, `None` until initialized
    pub kind: Option<VersionKind>,
    /// Kind-specific pattern
    /// - latest: `latest` or an exact candidate
    /// - regex: a regular expression
    /// - semver, regex/semver: a constraint
    /// - time, regex/time: a date layout
    pub pattern: String,
    /// Extraction regex for regex/semver and regex/time, first capture group is used
    pub regex: String,
    /// Reject loosely formed semantic versions
    pub strict: bool,
}

impl Filter {
    pub fn new(kind: VersionKind, pattern: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    pub fn with_regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = regex.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Copy of this filter searching for another pattern
    ///
    /// Used when a pattern is supplied at search time (e.g. the output of a
    /// previous source); the shared filter is left untouched.
    pub fn with_pattern(&self, pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..self.clone()
        }
    }

    /// Returns a valid copy of the filter with defaults applied
    ///
    /// The kind defaults to `latest`; the pattern defaults by kind. The
    /// combination kinds and `time` get no default: an empty regex/semver
    /// constraint selects the highest version, prereleases included, and date
    /// layouts must be configured.
    pub fn init(mut self) -> Result<Self, FilterError> {
        let kind = *self.kind.get_or_insert(VersionKind::Latest);

        if self.pattern.is_empty() {
            match kind {
                VersionKind::Latest => self.pattern = DEFAULT_LATEST_PATTERN.to_string(),
                VersionKind::Regex => self.pattern = DEFAULT_REGEX_PATTERN.to_string(),
                VersionKind::Semver => self.pattern = DEFAULT_SEMVER_PATTERN.to_string(),
                VersionKind::Time | VersionKind::RegexSemver | VersionKind::RegexTime => {
                    warn!("No default pattern provided for kind {:?}", kind.as_str());
                }
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Check that the filter can be dispatched
    pub fn validate(&self) -> Result<(), FilterError> {
        let kind = self.kind.ok_or_else(|| FilterError::UnsupportedKind {
            kind: String::new(),
        })?;

        let unsupported = |pattern: &str| FilterError::UnsupportedKindPattern {
            kind: kind.as_str().to_string(),
            pattern: pattern.to_string(),
        };

        match kind {
            VersionKind::Time | VersionKind::RegexTime if self.pattern.is_empty() => {
                Err(unsupported(&self.pattern))
            }
            VersionKind::RegexSemver | VersionKind::RegexTime if self.regex.is_empty() => {
                Err(unsupported(&self.regex))
            }
            _ => Ok(()),
        }
    }

    /// Returns true if the filter was never configured
    pub fn is_zero(&self) -> bool {
        *self == Filter::default()
    }

    /// Search candidates ordered oldest first
    pub fn search<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Version, FilterError> {
        self.search_ordered(candidates, CandidateOrder::OldestFirst)
    }

    /// Search candidates in the given order
    ///
    /// The order decides which candidate is the most recent for the latest
    /// and regex kinds, and breaks ties between equal semver or time values.
    pub fn search_ordered<S: AsRef<str>>(
        &self,
        candidates: &[S],
        order: CandidateOrder,
    ) -> Result<Version, FilterError> {
        debug!("Searching for version matching pattern {:?}", self.pattern);

        if candidates.is_empty() {
            return Err(FilterError::NoVersionsFound);
        }

        let mut ordered: Vec<&str> = candidates.iter().map(AsRef::as_ref).collect();
        if order == CandidateOrder::NewestFirst {
            ordered.reverse();
        }

        let matcher = self.matcher()?;
        let found = matcher.find(&ordered)?;
        let original = ordered[found.index];

        debug!(
            "Found version {:?} ({:?}) using {} matcher",
            found.parsed,
            original,
            matcher.kind()
        );

        Ok(Version::new(found.parsed, original))
    }

    /// Pattern matching anything newer than `baseline` within this policy
    pub fn greater_than_pattern(&self, baseline: &str) -> Result<String, FilterError> {
        pattern::greater_than_pattern(self, baseline)
    }

    /// Closest filter for an existing version value, if one can be guessed
    pub fn from_value(value: &str) -> Option<Self> {
        infer::infer_filter(value)
    }

    fn matcher(&self) -> Result<Box<dyn VersionMatcher>, FilterError> {
        let kind = self
            .kind
            .ok_or_else(|| FilterError::UnsupportedKindPattern {
                kind: String::new(),
                pattern: self.pattern.clone(),
            })?;

        Ok(match kind {
            VersionKind::Latest => Box::new(LatestMatcher::new(&self.pattern)),
            VersionKind::Regex => Box::new(RegexMatcher::new(&self.pattern)?),
            VersionKind::Semver => Box::new(SemverMatcher::new(&self.pattern, self.strict)?),
            VersionKind::Time => Box::new(TimeMatcher::new(&self.pattern)?),
            VersionKind::RegexSemver => Box::new(CaptureMatcher::semver(
                &self.regex,
                &self.pattern,
                self.strict,
            )?),
            VersionKind::RegexTime => Box::new(CaptureMatcher::time(&self.regex, &self.pattern)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Filter::new(VersionKind::Latest, "latest"), vec!["1.0", "2.0", "3.0"], Version::verbatim("3.0"))]
    #[case(Filter::new(VersionKind::Latest, "2.0"), vec!["1.0", "2.0", "3.0"], Version::verbatim("2.0"))]
    #[case(Filter::new(VersionKind::Semver, "~2"), vec!["1.0", "2.0", "3.0"], Version::new("2.0.0", "2.0"))]
    #[case(Filter::new(VersionKind::Semver, ""), vec!["1.0", "2.0", "3.0"], Version::new("3.0.0", "3.0"))]
    #[case(Filter::new(VersionKind::Regex, r"^updatecli-2.(\d*)$"), vec!["updatecli-1.0", "updatecli-2.0", "updatecli-3.0"], Version::verbatim("updatecli-2.0"))]
    #[case(Filter::new(VersionKind::Regex, ".*"), vec!["updatecli-1.0", "updatecli-2.0", "updatecli-3.0"], Version::verbatim("updatecli-3.0"))]
    #[case(Filter::new(VersionKind::Time, "2006-01-02"), vec!["2024-01-10", "2024-02-01", "2023-12-31"], Version::verbatim("2024-02-01"))]
    #[case(Filter::new(VersionKind::RegexSemver, "").with_regex("^updatecli-(.*)$"), vec!["updatecli-1.0", "updatecli-2.0"], Version::new("2.0.0", "updatecli-2.0"))]
    #[case(Filter::new(VersionKind::RegexTime, "20060102").with_regex(r"-(\d+)$"), vec!["build-20240101", "build-20231231"], Version::new("20240101", "build-20240101"))]
    fn search_returns_expected_version(
        #[case] filter: Filter,
        #[case] candidates: Vec<&str>,
        #[case] expected: Version,
    ) {
        assert_eq!(filter.search(&candidates).unwrap(), expected);
    }

    #[rstest]
    #[case(Filter::new(VersionKind::Semver, "~2"), vec!["updatecli-1.0", "updatecli-2.0", "updatecli-3.0"], "no valid semantic version found")]
    #[case(Filter::new(VersionKind::Regex, r"^updatecli-4.(\d*)$"), vec!["updatecli-1.0", "updatecli-3.0"], r#"no version found matching pattern "^updatecli-4.(\\d*)$""#)]
    #[case(Filter::new(VersionKind::Latest, "latest"), vec![], "no versions found")]
    #[case(Filter::new(VersionKind::Time, "2006-01-02"), vec!["v1.0.0"], "no valid date found")]
    #[case(Filter::new(VersionKind::Semver, "xyz"), vec!["1.0.0"], "improper constraint: xyz")]
    #[case(Filter::default(), vec!["1.0.0"], r#"unsupported pattern "" for version kind """#)]
    fn search_reports_errors(
        #[case] filter: Filter,
        #[case] candidates: Vec<&str>,
        #[case] message: &str,
    ) {
        let err = filter.search(&candidates).unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    #[case(Filter::new(VersionKind::Latest, "latest"), "0.9")]
    #[case(Filter::new(VersionKind::Regex, "^v"), "v1.0")]
    #[case(Filter::new(VersionKind::Semver, "*"), "2.0")]
    fn search_ordered_newest_first(#[case] filter: Filter, #[case] expected: &str) {
        let candidates = ["1.0", "v1.0", "2.0", "0.9"];
        let newest_first: Vec<&str> = candidates.iter().rev().copied().collect();
        let found = filter
            .search_ordered(&newest_first, CandidateOrder::NewestFirst)
            .unwrap();
        assert_eq!(found.original_version, expected);
    }

    #[test]
    fn search_accepts_owned_strings() {
        let candidates = vec!["1.0".to_string(), "2.0".to_string()];
        let found = Filter::new(VersionKind::Semver, "*")
            .search(&candidates)
            .unwrap();
        assert_eq!(found, Version::new("2.0.0", "2.0"));
    }

    #[test]
    fn regex_semver_without_pattern_selects_highest_including_prereleases() {
        let candidates = ["app-1.0.0", "app-2.0.0-rc.1"];
        let filter = Filter::new(VersionKind::RegexSemver, "")
            .with_regex("^app-(.*)$")
            .init()
            .unwrap();

        assert_eq!(filter.pattern, "");
        assert_eq!(
            filter.search(&candidates).unwrap(),
            Version::new("2.0.0-rc.1", "app-2.0.0-rc.1")
        );
    }

    #[rstest]
    #[case(Filter::new(VersionKind::Semver, "*"), vec!["1.0.0", "v3.0.0", "2.0"], Version::new("3.0.0", "v3.0.0"))]
    #[case(Filter::new(VersionKind::Semver, "*").with_strict(true), vec!["1.0.0", "v3.0.0", "2.0"], Version::new("1.0.0", "1.0.0"))]
    #[case(Filter::new(VersionKind::RegexSemver, "").with_regex("^app-(.*)$").with_strict(true), vec!["app-1.2.0", "app-v2.0.0", "app-1.5"], Version::new("1.2.0", "app-1.2.0"))]
    fn search_honors_strict(
        #[case] filter: Filter,
        #[case] candidates: Vec<&str>,
        #[case] expected: Version,
    ) {
        assert_eq!(filter.search(&candidates).unwrap(), expected);
    }

    #[test]
    fn strict_search_without_strict_candidate_fails() {
        let err = Filter::new(VersionKind::Semver, "*")
            .with_strict(true)
            .search(&["v1.0.0", "2.0"])
            .unwrap_err();
        assert!(matches!(err, FilterError::NoValidSemVerFound));
    }

    #[rstest]
    #[case(Filter::new(VersionKind::Latest, "latest"), Filter::new(VersionKind::Latest, "latest"))]
    #[case(Filter::default(), Filter::new(VersionKind::Latest, "latest"))]
    #[case(Filter::new(VersionKind::Semver, ""), Filter::new(VersionKind::Semver, "*"))]
    #[case(Filter::new(VersionKind::Regex, ""), Filter::new(VersionKind::Regex, ".*"))]
    #[case(Filter::new(VersionKind::RegexSemver, "").with_regex("(.*)"), Filter::new(VersionKind::RegexSemver, "").with_regex("(.*)"))]
    #[case(Filter::new(VersionKind::Time, "%Y"), Filter::new(VersionKind::Time, "%Y"))]
    fn init_applies_defaults(#[case] filter: Filter, #[case] expected: Filter) {
        let initialized = filter.init().unwrap();
        assert_eq!(initialized, expected);
        assert_eq!(initialized.clone().init().unwrap(), initialized);
    }

    #[rstest]
    #[case(Filter::new(VersionKind::Time, ""), r#"unsupported pattern "" for version kind "time""#)]
    #[case(Filter::new(VersionKind::RegexTime, "2006"), r#"unsupported pattern "" for version kind "regex/time""#)]
    #[case(Filter::new(VersionKind::RegexSemver, "~1"), r#"unsupported pattern "" for version kind "regex/semver""#)]
    fn init_rejects_missing_layout_or_regex(#[case] filter: Filter, #[case] message: &str) {
        let err = filter.init().unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    #[case(Filter::new(VersionKind::Semver, "~2"), true)]
    #[case(Filter::new(VersionKind::Regex, "~2"), true)]
    #[case(Filter::default(), false)]
    fn validate_checks_kind(#[case] filter: Filter, #[case] valid: bool) {
        assert_eq!(filter.validate().is_ok(), valid);
    }

    #[test]
    fn validate_without_kind_reports_unsupported_kind() {
        let err = Filter::default().validate().unwrap_err();
        assert_eq!(err.to_string(), r#"unsupported version kind """#);
    }

    #[rstest]
    #[case(Filter::default(), true)]
    #[case(Filter::new(VersionKind::Latest, ""), false)]
    #[case(Filter::default().with_strict(true), false)]
    #[case(Filter { pattern: "*".to_string(), ..Default::default() }, false)]
    fn is_zero_only_for_default(#[case] filter: Filter, #[case] expected: bool) {
        assert_eq!(filter.is_zero(), expected);
    }

    #[test]
    fn with_pattern_leaves_original_untouched() {
        let shared = Filter::new(VersionKind::Latest, "latest");
        let overridden = shared.with_pattern("2.0");

        assert_eq!(shared.pattern, "latest");
        assert_eq!(
            overridden.search(&["1.0", "2.0", "3.0"]).unwrap(),
            Version::verbatim("2.0")
        );
    }
}
