//! Common types for version searches

use std::fmt;

/// A version selected by a filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// Normalized value in the matcher's domain (e.g. `1.2.0` for `v1.2`)
    pub parsed_version: String,
    /// Candidate exactly as it appeared in the input list
    pub original_version: String,
}

impl Version {
    pub fn new(parsed_version: impl Into<String>, original_version: impl Into<String>) -> Self {
        Self {
            parsed_version: parsed_version.into(),
            original_version: original_version.into(),
        }
    }

    /// Version whose parsed and original values are the same candidate
    pub fn verbatim(candidate: impl Into<String>) -> Self {
        let candidate = candidate.into();
        Self {
            parsed_version: candidate.clone(),
            original_version: candidate,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parsed_version)
    }
}

/// Ordering of a candidate list
///
/// The latest and regex matchers prefer the most recent candidate, so they
/// need to know which end of the list is newest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Oldest candidate first, newest last (registry publishing order)
    #[default]
    OldestFirst,
    /// Newest candidate first
    NewestFirst,
}

/// Winner of a matcher run over a candidate slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Index of the winning candidate in the slice handed to the matcher
    pub index: usize,
    /// Normalized value of the winning candidate
    pub parsed: String,
}
