//! Version matching abstraction for the different filter kinds

use crate::version::error::FilterError;
use crate::version::kind::VersionKind;
use crate::version::types::Match;

/// Trait for kind-specific version matching logic
///
/// Each kind picks its winner differently:
/// - latest/regex: the most recent candidate satisfying the pattern
/// - semver: the highest version satisfying the constraint
/// - time: the most recent date
pub trait VersionMatcher: Send + Sync {
    /// Returns the kind this matcher handles
    fn kind(&self) -> VersionKind;

    /// Pick the winning candidate
    ///
    /// `candidates` must be ordered oldest first. The returned index points
    /// into `candidates`.
    fn find(&self, candidates: &[&str]) -> Result<Match, FilterError>;
}
