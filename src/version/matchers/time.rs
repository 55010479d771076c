//! Date version matcher
//!
//! Candidates are parsed with a date layout; the most recent date wins.

use tracing::trace;

use crate::version::error::FilterError;
use crate::version::kind::VersionKind;
use crate::version::layout::DateLayout;
use crate::version::matcher::VersionMatcher;
use crate::version::types::Match;

pub struct TimeMatcher {
    layout: DateLayout,
}

impl TimeMatcher {
    pub fn new(layout: &str) -> Result<Self, FilterError> {
        Ok(Self {
            layout: DateLayout::new(layout)?,
        })
    }
}

impl VersionMatcher for TimeMatcher {
    fn kind(&self) -> VersionKind {
        VersionKind::Time
    }

    fn find(&self, candidates: &[&str]) -> Result<Match, FilterError> {
        if candidates.is_empty() {
            return Err(FilterError::NoVersionsFound);
        }

        let (index, _) = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| match self.layout.parse(candidate) {
                Some(date) => Some((index, date)),
                None => {
                    trace!(
                        "Skipping candidate {:?}: does not match layout {:?}",
                        candidate,
                        self.layout.source()
                    );
                    None
                }
            })
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ia.cmp(ib)))
            .ok_or(FilterError::NoValidDateFound)?;

        Ok(Match {
            index,
            parsed: candidates[index].to_string(),
        })
    }
}
