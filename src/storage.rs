//! Storage adapters for RFC 3339 values.
//!
//! Values are stored as plain text columns. [`ToSqlValue`] renders the value
//! (no quoting); [`Scan`] reads it back, replacing the whole value:
//!
//! | Incoming [`SqlValue`] | Result |
//! |---|---|
//! | `Null` | value left unchanged |
//! | `Text("")` | reset to the zero value |
//! | `Text(s)` | replaced by the parsed `s`, or the parse error |
//! | anything else | [`Error::TypeMismatch`] naming the type |
//!
//! ```rust
//! use rfc3339_time::{DateTime, Scan, SqlValue, ToSqlValue};
//!
//! let mut dt = DateTime::default();
//! dt.scan(SqlValue::from("2023-09-27T13:15:00.000-04:00")).unwrap();
//! assert_eq!(
//!     dt.to_sql_value().unwrap(),
//!     SqlValue::from("2023-09-27T13:15:00-04:00")
//! );
//!
//! let err = dt.scan(SqlValue::Integer(42)).unwrap_err();
//! assert_eq!(err.to_string(), "value must be a string, got: integer");
//! ```

use crate::error::{Error, Result};
use crate::value::SqlValue;
use crate::Rfc3339;

/// Converts a value into its storage representation.
pub trait ToSqlValue {
    /// # Errors
    ///
    /// Implementations in this crate never fail.
    fn to_sql_value(&self) -> Result<SqlValue>;
}

/// Reads a value out of its storage representation.
pub trait Scan {
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for non-text input, otherwise any parse
    /// error. On error the value is left unchanged.
    fn scan(&mut self, value: SqlValue) -> Result<()>;
}

impl<T: Rfc3339> ToSqlValue for T {
    fn to_sql_value(&self) -> Result<SqlValue> {
        Ok(SqlValue::Text(self.to_rfc3339()))
    }
}

impl<T: Rfc3339> Scan for T {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let text = match value {
            SqlValue::Null => return Ok(()),
            SqlValue::Text(text) => text,
            other => {
                log::debug!("rejected {} scan of {} value", T::KIND, other.type_name());
                return Err(Error::type_mismatch(other.type_name()));
            }
        };

        *self = if text.is_empty() {
            T::default()
        } else {
            T::parse_rfc3339(&text)?
        };
        Ok(())
    }
}
