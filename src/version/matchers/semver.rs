//! Semantic version matcher
//!
//! Candidates are parsed loosely (`v1.2`, `1`) unless strict mode is on.
//! Unparsable candidates are skipped. The highest version satisfying the
//! constraint wins; without a constraint the highest version wins.

use semver::Version;
use tracing::trace;

use crate::version::constraint::{Constraint, precedence};
use crate::version::error::FilterError;
use crate::version::kind::VersionKind;
use crate::version::matcher::VersionMatcher;
use crate::version::semver::parse_with;
use crate::version::types::Match;

pub struct SemverMatcher {
    constraint: Option<Constraint>,
    strict: bool,
}

impl SemverMatcher {
    /// An empty constraint selects the highest version
    pub fn new(constraint: &str, strict: bool) -> Result<Self, FilterError> {
        let constraint = match constraint {
            "" => None,
            c => Some(Constraint::parse(c)?),
        };
        Ok(Self { constraint, strict })
    }

    /// Parse candidates and sort them, highest first
    ///
    /// Candidates parsing to the same version keep the most recent one first.
    fn sorted(&self, candidates: &[&str]) -> Vec<(usize, Version)> {
        let mut versions: Vec<(usize, Version)> = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| match parse_with(candidate, self.strict) {
                Ok(version) => Some((index, version)),
                Err(err) => {
                    trace!("Skipping candidate {:?}: {}", candidate, err);
                    None
                }
            })
            .collect();

        versions.sort_by(|(ia, a), (ib, b)| precedence(b, a).then(ib.cmp(ia)));
        versions
    }
}

impl VersionMatcher for SemverMatcher {
    fn kind(&self) -> VersionKind {
        VersionKind::Semver
    }

    fn find(&self, candidates: &[&str]) -> Result<Match, FilterError> {
        if candidates.is_empty() {
            return Err(FilterError::NoVersionsFound);
        }

        let versions = self.sorted(candidates);
        if versions.is_empty() {
            return Err(FilterError::NoValidSemVerFound);
        }

        let (index, version) = match &self.constraint {
            None => versions.first(),
            Some(constraint) => versions.iter().find(|(_, v)| constraint.matches(v)),
        }
        .ok_or(FilterError::NoVersionFound)?;

        Ok(Match {
            index: *index,
            parsed: version.to_string(),
        })
    }
}
