//! The RFC 3339 `full-date` value.

use crate::construct::build_full_date;
use crate::date_time::DateTime;
use crate::error::{Error, Result};
use crate::format::render_full_date;
use crate::grammar;
use crate::json;
use crate::Rfc3339;
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An RFC 3339 `full-date`: a calendar date with no time of day or offset.
///
/// Viewed as an instant (see [`FullDate::to_date_time`]) it sits at midnight
/// UTC. The [`Default`] value is the zero value, `0001-01-01`.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::FullDate;
///
/// let date = FullDate::parse("2023-04-03").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2023, 4, 3));
/// assert_eq!(date.to_string(), "2023-04-03");
/// assert_eq!(date.to_date_time().to_string(), "2023-04-03T00:00:00Z");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FullDate(NaiveDate);

fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).expect("0001-01-01 is representable")
}

impl FullDate {
    /// Parses an RFC 3339 `full-date` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FullDateMismatch`] if the input does not match the
    /// grammar, or [`Error::OutOfRange`] for an impossible date such as
    /// `2023-02-31`.
    pub fn parse(input: &str) -> Result<Self> {
        log::trace!("parsing full-date {:?}", input);
        let caps = grammar::match_full_date(input).ok_or_else(|| {
            log::debug!("rejected full-date {:?}: grammar mismatch", input);
            Error::full_date_mismatch(input)
        })?;

        build_full_date(&caps).map(FullDate).ok_or_else(|| {
            log::debug!("rejected full-date {:?}: field out of range", input);
            Error::out_of_range(Self::KIND, input)
        })
    }

    /// Parses a string known to be valid, panicking otherwise.
    ///
    /// # Panics
    ///
    /// Panics with the parse error if `input` is not a valid `full-date`.
    #[must_use]
    pub fn must_parse(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Returns the zero value, `0001-01-01`.
    #[must_use]
    pub fn zero() -> Self {
        FullDate(zero_date())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == zero_date()
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
    pub const fn as_chrono(&self) -> &NaiveDate {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns this date as midnight at UTC.
    #[must_use]
    pub fn to_date_time(&self) -> DateTime {
        DateTime::from(Utc.from_utc_datetime(&self.0.and_time(chrono::NaiveTime::MIN)))
    }

    /// Renders as JSON text: `null` for the zero value, else a quoted string.
    #[must_use]
    pub fn to_json(&self) -> String {
        json::to_json(self)
    }

    /// Parses JSON text produced by [`FullDate::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is neither `null` nor a JSON
    /// string, otherwise any error from [`FullDate::parse`].
    pub fn from_json(text: &str) -> Result<Self> {
        json::from_json(text)
    }
}

impl Default for FullDate {
    fn default() -> Self {
        Self::zero()
    }
}

impl Rfc3339 for FullDate {
    const KIND: &'static str = "full-date";

    fn parse_rfc3339(input: &str) -> Result<Self> {
        Self::parse(input)
    }

    fn to_rfc3339(&self) -> String {
        render_full_date(&self.0)
    }

    fn is_zero(&self) -> bool {
        FullDate::is_zero(self)
    }
}

impl fmt::Display for FullDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl FromStr for FullDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for FullDate {
    fn from(date: NaiveDate) -> Self {
        FullDate(date)
    }
}

/// Takes the calendar date as seen at the value's own offset.
impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for FullDate {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        FullDate(dt.date_naive())
    }
}

impl From<DateTime> for FullDate {
    fn from(dt: DateTime) -> Self {
        FullDate(dt.as_chrono().date_naive())
    }
}

impl From<FullDate> for NaiveDate {
    fn from(date: FullDate) -> Self {
        date.0
    }
}

impl Serialize for FullDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        json::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for FullDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        json::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_parse() {
        let date = FullDate::parse("2023-04-03").unwrap();
        assert_eq!(date.into_inner(), NaiveDate::from_ymd_opt(2023, 4, 3).unwrap());
    }

    #[test]
    fn test_parse_rejects() {
        let err = FullDate::parse("2023/04/03").unwrap_err();
        assert!(err.to_string().contains("is not a full-date string"));

        let err = FullDate::parse("2023-02-31").unwrap_err();
        assert_eq!(err, Error::out_of_range("full-date", "2023-02-31"));
    }

    #[test]
    fn test_midnight_utc() {
        let dt = FullDate::parse("2023-04-03").unwrap().to_date_time();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
        assert_eq!(dt.nanosecond(), 0);
        assert_eq!(dt.offset_seconds(), 0);
    }

    #[test]
    fn test_zero_date_formats() {
        let date = FullDate::parse("0001-01-01").unwrap();
        assert_eq!(date.to_string(), "0001-01-01");
        assert!(date.is_zero());
        assert_eq!(FullDate::default(), date);
    }

    #[test]
    fn test_from_date_time_uses_local_date() {
        let dt = FixedOffset::east_opt(-14_400)
            .unwrap()
            .with_ymd_and_hms(2023, 4, 1, 23, 30, 0)
            .unwrap();
        assert_eq!(FullDate::from(dt).to_string(), "2023-04-01");
        assert_eq!(FullDate::from(DateTime::from(dt)).to_string(), "2023-04-01");
    }

    #[test]
    #[should_panic(expected = "`04/01/2023` is not a full-date string")]
    fn test_must_parse_panics() {
        let _ = FullDate::must_parse("04/01/2023");
    }
}
