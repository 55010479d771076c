use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("invalid semantic version {0:?}")]
    Invalid(String),

    #[error("invalid prerelease or build metadata in {version:?}: {reason}")]
    Identifier { version: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("improper constraint: {0}")]
    Improper(String),

    #[error("invalid version {version:?} in constraint {constraint:?}")]
    InvalidVersion { constraint: String, version: String },
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("unsupported version kind {kind:?}")]
    UnsupportedKind { kind: String },

    #[error("unsupported pattern {pattern:?} for version kind {kind:?}")]
    UnsupportedKindPattern { kind: String, pattern: String },

    #[error("no versions found")]
    NoVersionsFound,

    #[error("no valid semantic version found")]
    NoValidSemVerFound,

    #[error("no valid date found")]
    NoValidDateFound,

    #[error("no version found")]
    NoVersionFound,

    #[error("no version found matching pattern {pattern:?}")]
    NoVersionFoundForPattern { pattern: String },

    #[error("wrong semantic versioning constraint {constraint:?}")]
    IncorrectSemVerConstraint { constraint: String },

    #[error("invalid date layout {layout:?}")]
    InvalidDateLayout { layout: String },

    #[error(transparent)]
    InvalidConstraint(#[from] ConstraintError),

    #[error(transparent)]
    InvalidVersion(#[from] VersionParseError),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}
