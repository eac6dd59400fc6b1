//! Dynamically-typed storage values.
//!
//! [`SqlValue`] is the tagged union exchanged with a storage layer. Drivers
//! map their native column values onto it; [`crate::storage`] converts between
//! it and the RFC 3339 types.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use rfc3339_time::SqlValue;
//!
//! let text = SqlValue::from("2023-04-01");
//! assert!(text.is_text());
//! assert_eq!(text.as_str(), Some("2023-04-01"));
//!
//! let number = SqlValue::from(42i64);
//! assert_eq!(number.type_name(), "integer");
//! assert_eq!(number.as_str(), None);
//! ```

use chrono::{DateTime, Utc};
use std::fmt;

/// A value read from or written to a storage column.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SqlValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Returns the name of this value's type, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc3339_time::SqlValue;
    ///
    /// assert_eq!(SqlValue::Null.type_name(), "null");
    /// assert_eq!(SqlValue::Float(1.5).type_name(), "float");
    /// assert_eq!(SqlValue::Bytes(vec![]).type_name(), "bytes");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Integer(_) => "integer",
            SqlValue::Float(_) => "float",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, SqlValue::Text(_))
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            SqlValue::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Bool(b) => write!(f, "{}", b),
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Float(x) => write!(f, "{}", x),
            SqlValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            SqlValue::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            SqlValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        SqlValue::Integer(i)
    }
}

impl From<i32> for SqlValue {
    fn from(i: i32) -> Self {
        SqlValue::Integer(i64::from(i))
    }
}

impl From<f64> for SqlValue {
    fn from(x: f64) -> Self {
        SqlValue::Float(x)
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(b: Vec<u8>) -> Self {
        SqlValue::Bytes(b)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(ts: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(ts)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(SqlValue::Null, Into::into)
    }
}
