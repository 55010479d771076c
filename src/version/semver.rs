use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};

use crate::version::error::VersionParseError;

static LOOSE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )
    .expect("loose version regex is valid")
});

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Accepts an optional leading `v` and one to three numeric components,
/// padding the missing ones with zeros. Prerelease and build metadata are
/// kept as-is.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2.3-rc.1+build" -> Version(1, 2, 3, pre: rc.1, build: build)
pub fn parse_version(version: &str) -> Result<Version, VersionParseError> {
    let captures = LOOSE_VERSION
        .captures(version)
        .ok_or_else(|| VersionParseError::Invalid(version.to_string()))?;

    let component = |index: usize| -> Result<u64, VersionParseError> {
        match captures.get(index) {
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .map_err(|_| VersionParseError::Invalid(version.to_string())),
            None => Ok(0),
        }
    };

    let identifier_error = |err: semver::Error| VersionParseError::Identifier {
        version: version.to_string(),
        reason: err.to_string(),
    };

    let pre = match captures.get(4) {
        Some(m) => Prerelease::new(m.as_str()).map_err(identifier_error)?,
        None => Prerelease::EMPTY,
    };
    let build = match captures.get(5) {
        Some(m) => BuildMetadata::new(m.as_str()).map_err(identifier_error)?,
        None => BuildMetadata::EMPTY,
    };

    Ok(Version {
        major: component(1)?,
        minor: component(2)?,
        patch: component(3)?,
        pre,
        build,
    })
}

/// Parse a version string following SemVer 2.0.0 to the letter.
///
/// All three components are required, the `v` prefix and leading zeros are
/// rejected.
pub fn parse_strict_version(version: &str) -> Result<Version, VersionParseError> {
    Version::parse(version).map_err(|_| VersionParseError::Invalid(version.to_string()))
}

/// Parse with the grammar selected by `strict`.
pub fn parse_with(version: &str, strict: bool) -> Result<Version, VersionParseError> {
    if strict {
        parse_strict_version(version)
    } else {
        parse_version(version)
    }
}
