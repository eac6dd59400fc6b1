//! The RFC 3339 `date-time` value.

use crate::construct::build_date_time;
use crate::error::{Error, Result};
use crate::format::render_date_time;
use crate::grammar;
use crate::json;
use crate::options::FormatOptions;
use crate::Rfc3339;
use chrono::{Datelike, FixedOffset, NaiveDate, TimeZone, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An RFC 3339 `date-time`: an instant with an explicit numeric UTC offset.
///
/// `DateTime` wraps a [`chrono::DateTime<FixedOffset>`]. There is no naive
/// state; every value carries its offset. The [`Default`] value is the zero
/// value, `0001-01-01T00:00:00Z`, which serializes to JSON `null`.
///
/// Equality, ordering and hashing follow chrono and compare instants, so
/// `12:00:00Z` equals `08:00:00-04:00`. Use [`DateTime::offset_seconds`] when
/// the offset matters.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::DateTime;
///
/// let dt = DateTime::parse("2023-04-01T08:30:00-04:00").unwrap();
/// assert_eq!(dt.year(), 2023);
/// assert_eq!(dt.hour(), 8);
/// assert_eq!(dt.offset_seconds(), -14_400);
/// assert_eq!(dt.to_string(), "2023-04-01T08:30:00-04:00");
///
/// assert!(DateTime::default().is_zero());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

fn zero_instant() -> chrono::DateTime<FixedOffset> {
    let midnight = NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("0001-01-01T00:00:00 is representable");
    FixedOffset::east_opt(0)
        .expect("UTC is a valid offset")
        .from_utc_datetime(&midnight)
}

impl DateTime {
    /// Parses an RFC 3339 `date-time` string.
    ///
    /// Fractional seconds beyond nine digits are truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateTimeMismatch`] if the input does not match the
    /// grammar, or [`Error::OutOfRange`] if it names an impossible date, time
    /// or offset.
    pub fn parse(input: &str) -> Result<Self> {
        log::trace!("parsing date-time {:?}", input);
        let caps = grammar::match_date_time(input).ok_or_else(|| {
            log::debug!("rejected date-time {:?}: grammar mismatch", input);
            Error::date_time_mismatch(input)
        })?;

        build_date_time(&caps).map(DateTime).ok_or_else(|| {
            log::debug!("rejected date-time {:?}: field out of range", input);
            Error::out_of_range(Self::KIND, input)
        })
    }

    /// Parses a string known to be valid, panicking otherwise.
    ///
    /// Intended for literals; see also [`date_time!`](crate::date_time).
    ///
    /// # Panics
    ///
    /// Panics with the parse error if `input` is not a valid `date-time`.
    #[must_use]
    pub fn must_parse(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Wraps a chrono value without validation.
    #[inline]
    #[must_use]
    pub const fn from_chrono(dt: chrono::DateTime<FixedOffset>) -> Self {
        DateTime(dt)
    }

    /// Returns the zero value, `0001-01-01T00:00:00Z`.
    #[must_use]
    pub fn zero() -> Self {
        DateTime(zero_instant())
    }

    /// Returns `true` if this is the zero instant, whatever its offset.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == zero_instant()
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Returns the UTC offset in seconds east of UTC.
    #[inline]
    #[must_use]
    pub fn offset_seconds(&self) -> i32 {
        self.0.offset().local_minus_utc()
    }

    /// Returns a reference to the wrapped chrono value.
    #[inline]
    #[must_use]
    pub const fn as_chrono(&self) -> &chrono::DateTime<FixedOffset> {
        &self.0
    }

    /// Unwraps into the chrono value.
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> chrono::DateTime<FixedOffset> {
        self.0
    }

    /// Renders with custom options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc3339_time::{DateTime, FormatOptions};
    ///
    /// let dt = DateTime::parse("2023-09-27T13:15:00-04:00").unwrap();
    /// assert_eq!(
    ///     dt.format_with(&FormatOptions::millis()),
    ///     "2023-09-27T13:15:00.000-04:00"
    /// );
    /// ```
    #[must_use]
    pub fn format_with(&self, options: &FormatOptions) -> String {
        render_date_time(&self.0, options)
    }

    /// Renders as JSON text: `null` for the zero value, else a quoted string.
    #[must_use]
    pub fn to_json(&self) -> String {
        json::to_json(self)
    }

    /// Parses JSON text produced by [`DateTime::to_json`].
    ///
    /// `null` and `""` yield the zero value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is neither `null` nor a JSON
    /// string, otherwise any error from [`DateTime::parse`].
    pub fn from_json(text: &str) -> Result<Self> {
        json::from_json(text)
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::zero()
    }
}

impl Rfc3339 for DateTime {
    const KIND: &'static str = "date-time";

    fn parse_rfc3339(input: &str) -> Result<Self> {
        Self::parse(input)
    }

    fn to_rfc3339(&self) -> String {
        self.format_with(&FormatOptions::default())
    }

    fn is_zero(&self) -> bool {
        DateTime::is_zero(self)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        DateTime(dt.fixed_offset())
    }
}

impl From<DateTime> for chrono::DateTime<FixedOffset> {
    fn from(dt: DateTime) -> Self {
        dt.0
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        json::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        json::deserialize(deserializer)
    }
}
