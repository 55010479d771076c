//! Latest version matcher
//!
//! - `latest` - the most recent candidate
//! - anything else - the most recent candidate equal to the pattern

use crate::config::DEFAULT_LATEST_PATTERN;
use crate::version::error::FilterError;
use crate::version::kind::VersionKind;
use crate::version::matcher::VersionMatcher;
use crate::version::types::Match;

pub struct LatestMatcher {
    pattern: String,
}

impl LatestMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl VersionMatcher for LatestMatcher {
    fn kind(&self) -> VersionKind {
        VersionKind::Latest
    }

    fn find(&self, candidates: &[&str]) -> Result<Match, FilterError> {
        let index = if self.pattern == DEFAULT_LATEST_PATTERN {
            candidates.len().checked_sub(1).ok_or(FilterError::NoVersionsFound)?
        } else {
            candidates
                .iter()
                .rposition(|candidate| *candidate == self.pattern)
                .ok_or_else(|| FilterError::NoVersionFoundForPattern {
                    pattern: self.pattern.clone(),
                })?
        };

        Ok(Match {
            index,
            parsed: candidates[index].to_string(),
        })
    }
}
