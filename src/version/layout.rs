//! Date layouts used by the time matchers
//!
//! A layout is either a chrono strftime format (`%Y-%m-%d`) or a
//! reference-time layout written against `Mon Jan 2 15:04:05 MST 2006`
//! (`2006-01-02`), which is translated to strftime on construction.
//!
//! Components a layout leaves out take their zero value, or one when zero
//! is impossible: `2006-01` reads as the first of the month at midnight,
//! and a time-only layout such as `15:04` lands on January 1st of year 0.
//! Hours read with `03` and no `PM` marker are taken as AM.
//!
//! Numeric fields follow chrono's parser, which skips whitespace in front of
//! a number: `" 2023-01-01"` parses under `2006-01-02`.

use chrono::NaiveDateTime;
use chrono::format::{self, Item, Parsed, StrftimeItems};

use crate::version::error::FilterError;

/// Reference-time tokens, longest first at each position
const REFERENCE_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    ("Z07:00", "%#z"),
    ("-07:00", "%:z"),
    ("Z0700", "%#z"),
    ("-0700", "%z"),
    (".000000000", "%.9f"),
    (".000000", "%.6f"),
    (".000", "%.3f"),
    ("2006", "%Y"),
    ("Jan", "%b"),
    ("Mon", "%a"),
    ("MST", "%Z"),
    ("_2", "%e"),
    ("01", "%m"),
    ("02", "%d"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("06", "%y"),
    ("15", "%H"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("1", "%m"),
    ("2", "%d"),
    ("3", "%I"),
    ("4", "%M"),
    ("5", "%S"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLayout {
    source: String,
    format: String,
}

impl DateLayout {
    pub fn new(layout: &str) -> Result<Self, FilterError> {
        let format = if layout.contains('%') {
            layout.to_string()
        } else {
            translate_reference_layout(layout)
        };

        let invalid = || FilterError::InvalidDateLayout {
            layout: layout.to_string(),
        };
        if !format.contains('%') {
            return Err(invalid());
        }
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        Ok(Self {
            source: layout.to_string(),
            format,
        })
    }

    /// Layout as configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Equivalent strftime format
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Parse a value, filling the fields the layout leaves out.
    ///
    /// Values carrying a UTC offset are normalized to UTC.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, value, StrftimeItems::new(&self.format)).ok()?;

        if let Some(datetime) = resolve(&parsed) {
            return Some(datetime);
        }

        fill_missing_fields(&mut parsed)?;
        resolve(&parsed)
    }
}

/// Year 0 when no year component was read, January 1st, midnight, AM
fn fill_missing_fields(parsed: &mut Parsed) -> Option<()> {
    if parsed.to_naive_date().is_err() {
        if parsed.year().is_none()
            && parsed.year_div_100().is_none()
            && parsed.year_mod_100().is_none()
        {
            parsed.set_year(0).ok()?;
        }
        if parsed.month().is_none() {
            parsed.set_month(1).ok()?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1).ok()?;
        }
    }

    if parsed.to_naive_time().is_err() {
        match (parsed.hour_div_12(), parsed.hour_mod_12()) {
            (None, None) => parsed.set_hour(0).ok()?,
            (None, Some(_)) => parsed.set_ampm(false).ok()?,
            _ => {}
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0).ok()?;
        }
        if parsed.second().is_none() {
            parsed.set_second(0).ok()?;
        }
    }

    Some(())
}

fn resolve(parsed: &Parsed) -> Option<NaiveDateTime> {
    parsed
        .to_datetime()
        .map(|datetime| datetime.naive_utc())
        .or_else(|_| parsed.to_naive_datetime_with_offset(0))
        .ok()
}

fn translate_reference_layout(layout: &str) -> String {
    let mut format = String::with_capacity(layout.len() * 2);
    let mut rest = layout;

    'outer: while let Some(c) = rest.chars().next() {
        for (token, directive) in REFERENCE_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                format.push_str(directive);
                rest = tail;
                continue 'outer;
            }
        }
        format.push(c);
        rest = &rest[c.len_utf8()..];
    }

    format
}
