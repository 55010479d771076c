//! Version kinds supported by a filter

use std::fmt;

use crate::version::error::FilterError;

/// How candidates are interpreted and matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionKind {
    /// Newest candidate, or exact text match
    Latest,
    /// Candidates matched against a regular expression
    Regex,
    /// Candidates parsed as semantic versions and matched against a constraint
    Semver,
    /// Candidates parsed as dates using a layout
    Time,
    /// Regex capture group parsed as a semantic version
    RegexSemver,
    /// Regex capture group parsed as a date
    RegexTime,
}

impl VersionKind {
    /// All supported kinds
    pub const ALL: [VersionKind; 6] = [
        VersionKind::Latest,
        VersionKind::Regex,
        VersionKind::Semver,
        VersionKind::Time,
        VersionKind::RegexSemver,
        VersionKind::RegexTime,
    ];

    /// Returns the configuration name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionKind::Latest => "latest",
            VersionKind::Regex => "regex",
            VersionKind::Semver => "semver",
            VersionKind::Time => "time",
            VersionKind::RegexSemver => "regex/semver",
            VersionKind::RegexTime => "regex/time",
        }
    }
}

impl std::str::FromStr for VersionKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(VersionKind::Latest),
            "regex" => Ok(VersionKind::Regex),
            "semver" => Ok(VersionKind::Semver),
            "time" => Ok(VersionKind::Time),
            "regex/semver" | "regex-semver" => Ok(VersionKind::RegexSemver),
            "regex/time" | "regex-time" => Ok(VersionKind::RegexTime),
            _ => Err(FilterError::UnsupportedKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
