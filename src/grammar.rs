//! Anchored grammars for RFC 3339 `date-time` and `full-date` strings.
//!
//! ```text
//! date-time = full-date ("T" / "t") partial-time time-offset
//! full-date = YYYY "-" MM "-" DD
//! partial-time = HH ":" MM ":" SS ["." 1*DIGIT]
//! time-offset = "Z" / "z" / ("+" / "-") HH ":" MM
//! ```
//!
//! Every field has a fixed width, which is what lets [`crate::fields`] assume
//! at most one leading zero. Digits are ASCII only.
//!
//! The compiled matchers live in process-wide statics, built once on first
//! use and shared read-only by every thread afterwards.

use regex_lite::{Captures, Regex};
use std::sync::OnceLock;

const DATE_TIME_PATTERN: &str = concat!(
    r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})",
    r"[tT]",
    r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})",
    r"(?P<secfrac>\.[0-9]+)?",
    r"(?:(?P<offset>[+-][0-9]{2}:[0-9]{2})|(?P<zulu>[zZ]))$",
);

const FULL_DATE_PATTERN: &str = r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$";

fn date_time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_TIME_PATTERN).expect("date-time grammar must compile"))
}

fn full_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FULL_DATE_PATTERN).expect("full-date grammar must compile"))
}

/// The UTC offset portion of a `date-time` match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetCapture<'a> {
    /// A literal `Z` or `z`.
    Zulu,
    /// A signed `±HH:MM` pair, sign included.
    Numeric(&'a str),
}

/// Named fields extracted from a `date-time` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeCaptures<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
    pub second: &'a str,
    /// Fractional seconds including the leading `.`, if present.
    pub fraction: Option<&'a str>,
    pub offset: OffsetCapture<'a>,
}

/// Named fields extracted from a `full-date` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FullDateCaptures<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
}

fn field<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name).map(|m| m.as_str())
}

/// Returns `true` if `input` matches the `date-time` grammar.
#[inline]
#[must_use]
pub fn is_date_time(input: &str) -> bool {
    date_time_regex().is_match(input)
}

/// Returns `true` if `input` matches the `full-date` grammar.
#[inline]
#[must_use]
pub fn is_full_date(input: &str) -> bool {
    full_date_regex().is_match(input)
}

/// Matches `input` against the `date-time` grammar and extracts its fields.
///
/// Returns `None` when the input is not conformant.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::grammar::{match_date_time, OffsetCapture};
///
/// let caps = match_date_time("2023-03-24T22:30:00.005Z").unwrap();
/// assert_eq!(caps.year, "2023");
/// assert_eq!(caps.fraction, Some(".005"));
/// assert_eq!(caps.offset, OffsetCapture::Zulu);
///
/// assert!(match_date_time("2023-03-24 22:30:00Z").is_none());
/// ```
#[must_use]
pub fn match_date_time(input: &str) -> Option<DateTimeCaptures<'_>> {
    let caps = date_time_regex().captures(input)?;
    let offset = match field(&caps, "offset") {
        Some(numeric) => OffsetCapture::Numeric(numeric),
        None => {
            field(&caps, "zulu")?;
            OffsetCapture::Zulu
        }
    };

    Some(DateTimeCaptures {
        year: field(&caps, "year")?,
        month: field(&caps, "month")?,
        day: field(&caps, "day")?,
        hour: field(&caps, "hour")?,
        minute: field(&caps, "minute")?,
        second: field(&caps, "second")?,
        fraction: field(&caps, "secfrac"),
        offset,
    })
}

/// Matches `input` against the `full-date` grammar and extracts its fields.
#[must_use]
pub fn match_full_date(input: &str) -> Option<FullDateCaptures<'_>> {
    let caps = full_date_regex().captures(input)?;
    Some(FullDateCaptures {
        year: field(&caps, "year")?,
        month: field(&caps, "month")?,
        day: field(&caps, "day")?,
    })
}
