//! Regex version matcher
//!
//! The most recent candidate matching the pattern wins. The pattern is not
//! anchored implicitly: use `^...$` to match whole candidates.

use regex::Regex;

use crate::version::error::FilterError;
use crate::version::kind::VersionKind;
use crate::version::matcher::VersionMatcher;
use crate::version::types::Match;

pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl VersionMatcher for RegexMatcher {
    fn kind(&self) -> VersionKind {
        VersionKind::Regex
    }

    fn find(&self, candidates: &[&str]) -> Result<Match, FilterError> {
        let index = candidates
            .iter()
            .rposition(|candidate| self.regex.is_match(candidate))
            .ok_or_else(|| FilterError::NoVersionFoundForPattern {
                pattern: self.regex.as_str().to_string(),
            })?;

        Ok(Match {
            index,
            parsed: candidates[index].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r"^v2\.(\d*)$", vec!["v1.0", "v2.0", "v3.0"], 1)]
    #[case(".*", vec!["a-1", "a-2", "a-3"], 2)]
    #[case(r"^updatecli-2.(\d*)$", vec!["updatecli-1.0", "updatecli-2.0", "updatecli-2.1", "updatecli-3.0"], 2)]
    #[case("alpine", vec!["3.18-alpine", "3.19-bookworm", "3.19-alpine"], 2)]
    fn find_returns_most_recent_match(
        #[case] pattern: &str,
        #[case] candidates: Vec<&str>,
        #[case] expected: usize,
    ) {
        let found = RegexMatcher::new(pattern).unwrap().find(&candidates).unwrap();
        assert_eq!(found.index, expected);
    }

    #[test]
    fn find_without_match_reports_pattern() {
        let err = RegexMatcher::new(r"^updatecli-4.(\d*)$")
            .unwrap()
            .find(&["updatecli-1.0", "updatecli-2.0", "updatecli-3.0"])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"no version found matching pattern "^updatecli-4.(\\d*)$""#
        );
    }

    #[test]
    fn new_surfaces_compile_error() {
        let err = RegexMatcher::new("^(v1").err().unwrap();
        assert!(matches!(err, FilterError::Regex(_)));
    }
}
