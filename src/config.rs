use serde::{Deserialize, Serialize};

use crate::version::error::FilterError;
use crate::version::filter::Filter;

// =============================================================================
// Default patterns
// =============================================================================

/// Default pattern of the `latest` kind, also the keyword selecting the newest candidate
pub const DEFAULT_LATEST_PATTERN: &str = "latest";

/// Default pattern of the `semver` kind (any release)
pub const DEFAULT_SEMVER_PATTERN: &str = "*";

/// Default pattern of the `regex` kind (any candidate)
pub const DEFAULT_REGEX_PATTERN: &str = ".*";

/// Version filter as written in user configuration
///
/// Every field is optional. The kind is kept as raw text here and narrowed
/// into a [`VersionKind`](crate::version::kind::VersionKind) when converted
/// into a [`Filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Version kind: latest, regex, semver, time, regex/semver, regex/time
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Kind-specific pattern: constraint, regex, or date layout
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    /// Extraction regex for regex/semver and regex/time
    #[serde(skip_serializing_if = "String::is_empty")]
    pub regex: String,
    /// Reject loosely formed semantic versions
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strict: bool,
}

impl TryFrom<FilterConfig> for Filter {
    type Error = FilterError;

    fn try_from(config: FilterConfig) -> Result<Self, Self::Error> {
        let kind = match config.kind.as_str() {
            "" => None,
            kind => Some(kind.parse()?),
        };

        Ok(Filter {
            kind,
            pattern: config.pattern,
            regex: config.regex,
            strict: config.strict,
        })
    }
}

impl From<Filter> for FilterConfig {
    fn from(filter: Filter) -> Self {
        Self {
            kind: filter
                .kind
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            pattern: filter.pattern,
            regex: filter.regex,
            strict: filter.strict,
        }
    }
}
