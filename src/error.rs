//! Error types for RFC 3339 parsing and conversion.
//!
//! Every failure is a pure function of the input, so errors carry the
//! offending text verbatim and nothing is ever retried.
//!
//! ## Error Categories
//!
//! - **Grammar mismatches**: the input does not satisfy the anchored `date-time`
//!   or `full-date` grammar
//! - **Out of range**: the input is grammar-conformant but names an impossible
//!   calendar date, time of day or UTC offset (e.g. `2023-02-31`)
//! - **Type mismatches**: a storage value presented for scanning is not text
//! - **JSON errors**: malformed JSON text, or a JSON value that is neither a
//!   string nor `null`, handed to the `from_json` helpers
//!
//! ## Examples
//!
//! ```rust
//! use rfc3339_time::{parse_date_time, Error};
//!
//! let err = parse_date_time("2023-03-31T16:30-04:00").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "input is not a date-time string: 2023-03-31T16:30-04:00"
//! );
//! assert_eq!(err.input(), Some("2023-03-31T16:30-04:00"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input does not match the `date-time` grammar.
    #[error("input is not a date-time string: {input}")]
    DateTimeMismatch { input: String },

    /// Input does not match the `full-date` grammar.
    #[error("`{input}` is not a full-date string")]
    FullDateMismatch { input: String },

    /// Input matches the grammar but a field is outside its legal range.
    #[error("{kind} `{input}` is out of range")]
    OutOfRange { kind: &'static str, input: String },

    /// A storage value presented for scanning was not text.
    #[error("value must be a string, got: {found}")]
    TypeMismatch { found: String },

    /// Malformed JSON text.
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Creates a grammar mismatch error for a `date-time` input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc3339_time::Error;
    ///
    /// let err = Error::date_time_mismatch("2023-03-24");
    /// assert!(err.to_string().contains("not a date-time string"));
    /// ```
    pub fn date_time_mismatch(input: &str) -> Self {
        Error::DateTimeMismatch {
            input: input.to_string(),
        }
    }

    /// Creates a grammar mismatch error for a `full-date` input.
    pub fn full_date_mismatch(input: &str) -> Self {
        Error::FullDateMismatch {
            input: input.to_string(),
        }
    }

    /// Creates an out-of-range error. `kind` names the grammar (`date-time`
    /// or `full-date`) the input was matched against.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc3339_time::Error;
    ///
    /// let err = Error::out_of_range("full-date", "2023-02-31");
    /// assert_eq!(err.to_string(), "full-date `2023-02-31` is out of range");
    /// ```
    pub fn out_of_range(kind: &'static str, input: &str) -> Self {
        Error::OutOfRange {
            kind,
            input: input.to_string(),
        }
    }

    /// Creates a type mismatch error naming the type that was observed.
    pub fn type_mismatch(found: &str) -> Self {
        Error::TypeMismatch {
            found: found.to_string(),
        }
    }

    /// Creates a JSON error with a display message.
    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }

    /// Returns the offending input for parse failures.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::DateTimeMismatch { input }
            | Error::FullDateMismatch { input }
            | Error::OutOfRange { input, .. } => Some(input),
            Error::TypeMismatch { .. } | Error::Json(_) => None,
        }
    }

    /// Returns `true` if the input failed the grammar itself.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(
            self,
            Error::DateTimeMismatch { .. } | Error::FullDateMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
