//! # rfc3339_time
//!
//! Strict parsing, validation and serialization of the two RFC 3339 textual
//! time representations: `date-time` (a full timestamp with a numeric UTC
//! offset) and `full-date` (a calendar date).
//!
//! ## Why strict?
//!
//! General-purpose date parsers guess. This crate accepts exactly
//!
//! ```text
//! YYYY-MM-DDTHH:MM:SS[.fraction](Z|±HH:MM)     date-time
//! YYYY-MM-DD                                  full-date
//! ```
//!
//! anchored at both ends, and rejects everything else with an error naming the
//! offending input. Fractional seconds are kept to nanosecond resolution;
//! finer digits are truncated, never rounded.
//!
//! ## Quick Start
//!
//! ```rust
//! use rfc3339_time::{parse_date_time, parse_full_date, is_date_time_string};
//!
//! assert!(is_date_time_string("2023-03-31T16:30:00-04:00"));
//! assert!(!is_date_time_string("2023-03-31T16:30-04:00"));
//!
//! let dt = parse_date_time("2023-03-24T22:30:00.005Z").unwrap();
//! assert_eq!(dt.nanosecond(), 5_000_000);
//! assert_eq!(dt.to_string(), "2023-03-24T22:30:00.005Z");
//!
//! let date = parse_full_date("2023-04-03").unwrap();
//! assert_eq!(date.to_string(), "2023-04-03");
//! ```
//!
//! ### JSON
//!
//! [`DateTime`] and [`FullDate`] implement serde's `Serialize` and
//! `Deserialize`. The zero value (the [`Default`]) is written as `null`, and
//! both `null` and `""` read back as the zero value:
//!
//! ```rust
//! use rfc3339_time::DateTime;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     created: DateTime,
//! }
//!
//! let event: Event = serde_json::from_str(r#"{"created":"2023-04-04T12:30:00-04:00"}"#).unwrap();
//! assert_eq!(event.created.hour(), 12);
//!
//! let empty = Event { created: DateTime::default() };
//! assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"created":null}"#);
//! ```
//!
//! ### Storage
//!
//! [`ToSqlValue`] and [`Scan`] map values to and from text columns through the
//! [`SqlValue`] tagged union; see [`storage`].
//!
//! ## Calendar validation
//!
//! A string that matches the grammar but names an impossible date, time or
//! offset (`2023-02-31`, `24:00:00`, `+24:00`) is rejected with
//! [`Error::OutOfRange`]. Leap seconds are not representable.
//!
//! ## Logging
//!
//! Rejections are reported at `debug` level through the `log` facade.

pub mod construct;
pub mod date_time;
pub mod error;
pub mod fields;
pub mod format;
pub mod full_date;
pub mod grammar;
mod json;
pub mod macros;
pub mod options;
pub mod storage;
pub mod value;

pub use date_time::DateTime;
pub use error::{Error, Result};
pub use full_date::FullDate;
pub use options::{FormatOptions, Precision, Separator, UtcDesignator};
pub use storage::{Scan, ToSqlValue};
pub use value::SqlValue;

/// Behavior shared by the two RFC 3339 value types.
///
/// The JSON and storage adapters are written once against this trait.
pub trait Rfc3339: Sized + Default {
    /// Grammar name, `date-time` or `full-date`.
    const KIND: &'static str;

    /// Strictly parses `input`.
    ///
    /// # Errors
    ///
    /// Returns a grammar mismatch or [`Error::OutOfRange`].
    fn parse_rfc3339(input: &str) -> Result<Self>;

    /// Renders the canonical string form. The zero value renders normally.
    fn to_rfc3339(&self) -> String;

    /// Returns `true` for the zero value.
    fn is_zero(&self) -> bool;
}

/// Returns `true` if `input` matches the RFC 3339 `date-time` grammar.
///
/// Only the grammar is checked; `2023-02-31T00:00:00Z` passes here but fails
/// [`parse_date_time`].
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::is_date_time_string;
///
/// assert!(is_date_time_string("2023-03-31T16:30:00-04:00"));
/// assert!(!is_date_time_string("2023-03-31T16:30-04:00"));
/// ```
#[must_use]
pub fn is_date_time_string(input: &str) -> bool {
    grammar::is_date_time(input)
}

/// Returns `true` if `input` matches the RFC 3339 `full-date` grammar.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::is_full_date_string;
///
/// assert!(is_full_date_string("2023-04-01"));
/// assert!(!is_full_date_string("04/01/2023"));
/// ```
#[must_use]
pub fn is_full_date_string(input: &str) -> bool {
    grammar::is_full_date(input)
}

/// Parses an RFC 3339 `date-time` string.
///
/// # Errors
///
/// Returns [`Error::DateTimeMismatch`] carrying the input when it does not
/// match the grammar, or [`Error::OutOfRange`] for impossible fields.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_date_time(input: &str) -> Result<DateTime> {
    DateTime::parse(input)
}

/// Parses an RFC 3339 `full-date` string.
///
/// # Errors
///
/// Returns [`Error::FullDateMismatch`] carrying the input when it does not
/// match the grammar, or [`Error::OutOfRange`] for impossible dates.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_full_date(input: &str) -> Result<FullDate> {
    FullDate::parse(input)
}

/// Parses a `date-time` known to be valid.
///
/// # Panics
///
/// Panics with the parse error message if `input` is invalid.
#[must_use]
pub fn must_parse_date_time(input: &str) -> DateTime {
    DateTime::must_parse(input)
}

/// Parses a `full-date` known to be valid.
///
/// # Panics
///
/// Panics with the parse error message if `input` is invalid.
#[must_use]
pub fn must_parse_full_date(input: &str) -> FullDate {
    FullDate::must_parse(input)
}
