//! Kind-specific version matchers

pub mod capture;
pub mod latest;
pub mod regexp;
pub mod semver;
pub mod time;

pub use capture::CaptureMatcher;
pub use latest::LatestMatcher;
pub use regexp::RegexMatcher;
pub use self::semver::SemverMatcher;
pub use time::TimeMatcher;
