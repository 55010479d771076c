//! Semantic version constraints
//!
//! Supports range expressions:
//! - `1.2.3`, `=1.2.3` - exact match (`1.2`, `1.x` behave like `~`)
//! - `!=1.2.3` - anything but
//! - `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3` - comparison operators
//! - `~1.2.3` - approximately equivalent (>=1.2.3 <1.3.0), `~1` is `1.x`
//! - `^1.2.3` - compatible with version (>=1.2.3 <2.0.0, special cases for 0.x)
//! - `1.2.x`, `1.x`, `*` - wildcards
//! - `1.0 - 2.0` - hyphen range (>=1.0 <=2.0)
//! - `>=1.0.0 <2.0.0`, `>=1.0.0, <2.0.0` - AND (space or comma separated)
//! - `^1.0.0 || ^2.0.0` - OR
//!
//! Prerelease versions only satisfy an AND group when one of its terms
//! carries a prerelease itself (`>=1.2.3-0`, `1.2.x-0`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::{Prerelease, Version};

use crate::version::error::ConstraintError;

static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(!=|>=|=>|<=|=<|~>|=|>|<|~|\^)?\s*v?([0-9]+|[xX*])(?:\.([0-9]+|[xX*]))?(?:\.([0-9]+|[xX*]))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
    )
    .expect("constraint term regex is valid")
});

static OPERATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(!=|>=|=>|<=|=<|~>|=|>|<|~|\^)$").expect("operator regex is valid")
});

/// Compare two versions by precedence, ignoring build metadata
pub(crate) fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

/// A parsed constraint: OR of AND groups
#[derive(Debug, Clone)]
pub struct Constraint {
    source: String,
    alternatives: Vec<Vec<Comparator>>,
}

impl Constraint {
    /// Parse a constraint expression
    pub fn parse(constraint: &str) -> Result<Self, ConstraintError> {
        let alternatives = constraint
            .split("||")
            .map(parse_group)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: constraint.to_string(),
            alternatives,
        })
    }

    /// Check if a version satisfies this constraint
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|group| {
            if !version.pre.is_empty() && !group.iter().any(|c| !c.version.pre.is_empty()) {
                return false;
            }
            group.iter().all(|c| c.matches(version))
        })
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse one `||` segment into its AND terms
fn parse_group(segment: &str) -> Result<Vec<Comparator>, ConstraintError> {
    let improper = || ConstraintError::Improper(segment.trim().to_string());

    let tokens: Vec<&str> = segment
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(improper());
    }

    let mut terms: Vec<String> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        // Hyphen range: "1.0 - 2.0" -> ">=1.0", "<=2.0"
        if tokens.get(i + 1) == Some(&"-") {
            let upper = tokens.get(i + 2).ok_or_else(improper)?;
            if OPERATOR.is_match(token) || token.starts_with(|c: char| !c.is_ascii_alphanumeric()) {
                return Err(improper());
            }
            terms.push(format!(">={token}"));
            terms.push(format!("<={upper}"));
            i += 3;
            continue;
        }

        // Operator separated from its version by whitespace: ">= 1.0"
        if OPERATOR.is_match(token) {
            let version = tokens.get(i + 1).ok_or_else(improper)?;
            terms.push(format!("{token}{version}"));
            i += 2;
            continue;
        }

        terms.push(token.to_string());
        i += 1;
    }

    terms
        .iter()
        .map(|term| Comparator::parse(term).unwrap_or_else(|| Err(improper())))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    /// `=` or no operator
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=` or `=>`
    GreaterEqual,
    /// `<=` or `=<`
    LessEqual,
    /// `~` or `~>`
    Tilde,
    /// `^`
    Caret,
}

impl Operator {
    fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "!=" => Operator::NotEqual,
            ">" => Operator::Greater,
            "<" => Operator::Less,
            ">=" | "=>" => Operator::GreaterEqual,
            "<=" | "=<" => Operator::LessEqual,
            "~" | "~>" => Operator::Tilde,
            "^" => Operator::Caret,
            _ => Operator::Equal,
        }
    }
}

/// Which component of the constraint version was left open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wildcard {
    /// Fully specified: 1.2.3
    None,
    /// Major is a wildcard: *, x
    Major,
    /// Minor missing or wildcard: 1, 1.x
    Minor,
    /// Patch missing or wildcard: 1.2, 1.2.x
    Patch,
}

/// A single operator/version term
#[derive(Debug, Clone)]
struct Comparator {
    op: Operator,
    version: Version,
    wildcard: Wildcard,
}

fn is_wildcard(component: &str) -> bool {
    matches!(component, "x" | "X" | "*")
}

impl Comparator {
    /// Returns `None` on a malformed term, `Some(Err)` on an invalid prerelease
    fn parse(term: &str) -> Option<Result<Self, ConstraintError>> {
        let captures = TERM.captures(term)?;

        let op = Operator::from_symbol(captures.get(1).map_or("", |m| m.as_str()));
        let major = captures.get(2).map_or("", |m| m.as_str());
        let minor = captures.get(3).map(|m| m.as_str());
        let patch = captures.get(4).map(|m| m.as_str());

        let number = |s: &str| s.parse::<u64>().ok();

        let (wildcard, major, minor, patch) = if is_wildcard(major) {
            (Wildcard::Major, 0, 0, 0)
        } else if minor.is_none_or(is_wildcard) {
            (Wildcard::Minor, number(major)?, 0, 0)
        } else if patch.is_none_or(is_wildcard) {
            (Wildcard::Patch, number(major)?, number(minor?)?, 0)
        } else {
            (Wildcard::None, number(major)?, number(minor?)?, number(patch?)?)
        };

        let pre = match captures.get(5) {
            Some(m) => match Prerelease::new(m.as_str()) {
                Ok(pre) => pre,
                Err(_) => {
                    return Some(Err(ConstraintError::InvalidVersion {
                        constraint: term.to_string(),
                        version: m.as_str().to_string(),
                    }));
                }
            },
            None => Prerelease::EMPTY,
        };

        let mut version = Version::new(major, minor, patch);
        version.pre = pre;

        Some(Ok(Self {
            op,
            version,
            wildcard,
        }))
    }

    fn matches(&self, v: &Version) -> bool {
        let c = &self.version;
        match self.op {
            Operator::Equal => {
                if self.wildcard == Wildcard::None {
                    precedence(v, c) == Ordering::Equal
                } else {
                    self.tilde(v)
                }
            }
            Operator::NotEqual => match self.wildcard {
                Wildcard::None => precedence(v, c) != Ordering::Equal,
                Wildcard::Major => false,
                Wildcard::Minor => v.major != c.major,
                Wildcard::Patch => v.major != c.major || v.minor != c.minor,
            },
            Operator::Greater => match self.wildcard {
                Wildcard::None => precedence(v, c) == Ordering::Greater,
                Wildcard::Major => false,
                // >1 needs 2.0.0 or higher
                Wildcard::Minor => v.major > c.major,
                // >1.1 needs 1.2.0 or higher
                Wildcard::Patch => v.major > c.major || (v.major == c.major && v.minor > c.minor),
            },
            Operator::Less => precedence(v, c) == Ordering::Less,
            Operator::GreaterEqual => precedence(v, c) != Ordering::Less,
            Operator::LessEqual => match self.wildcard {
                Wildcard::None => precedence(v, c) != Ordering::Greater,
                Wildcard::Major => true,
                Wildcard::Minor => v.major <= c.major,
                Wildcard::Patch => v.major < c.major || (v.major == c.major && v.minor <= c.minor),
            },
            Operator::Tilde => self.tilde(v),
            Operator::Caret => self.caret(v),
        }
    }

    fn tilde(&self, v: &Version) -> bool {
        let c = &self.version;
        if precedence(v, c) == Ordering::Less {
            return false;
        }
        // ~0.0.0 and * accept everything
        if self.wildcard == Wildcard::Major
            || (c.major == 0 && c.minor == 0 && c.patch == 0 && self.wildcard == Wildcard::None)
        {
            return true;
        }
        if v.major != c.major {
            return false;
        }
        self.wildcard == Wildcard::Minor || v.minor == c.minor
    }

    fn caret(&self, v: &Version) -> bool {
        let c = &self.version;
        if precedence(v, c) == Ordering::Less {
            return false;
        }
        // ^1.2.3 and ^1 -> same major
        if c.major > 0 || self.wildcard == Wildcard::Minor {
            return v.major == c.major;
        }
        if v.major > 0 {
            return false;
        }
        // ^0.2.3 and ^0.0 -> same minor
        if c.minor > 0 || self.wildcard == Wildcard::Patch {
            return v.minor == c.minor;
        }
        if v.minor > 0 {
            return false;
        }
        // ^0.0.3 -> exact patch
        v.patch == c.patch
    }
}
