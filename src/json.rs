//! JSON boundary shared by [`DateTime`](crate::DateTime) and
//! [`FullDate`](crate::FullDate).
//!
//! The zero value goes out as `null`. Coming in, `null` and the empty string
//! both map back to the zero value; any other string must parse.

use crate::error::{Error, Result};
use crate::Rfc3339;
use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;
use std::marker::PhantomData;

pub(crate) fn serialize<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Rfc3339,
    S: Serializer,
{
    if value.is_zero() {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(&value.to_rfc3339())
    }
}

pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: Rfc3339,
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(Rfc3339Visitor(PhantomData))
}

struct Rfc3339Visitor<T>(PhantomData<T>);

impl<'de, T: Rfc3339> Visitor<'de> for Rfc3339Visitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an RFC 3339 {} string or null", T::KIND)
    }

    fn visit_none<E>(self) -> std::result::Result<T, E> {
        Ok(T::default())
    }

    fn visit_unit<E>(self) -> std::result::Result<T, E> {
        Ok(T::default())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<T, E>
    where
        E: de::Error,
    {
        if value.is_empty() {
            return Ok(T::default());
        }
        T::parse_rfc3339(value).map_err(E::custom)
    }
}

/// Renders `value` as JSON text.
pub(crate) fn to_json<T: Rfc3339>(value: &T) -> String {
    let json = if value.is_zero() {
        serde_json::Value::Null
    } else {
        serde_json::Value::String(value.to_rfc3339())
    };
    json.to_string()
}

/// Parses JSON text holding `null` or a string.
///
/// Malformed JSON and non-string values become [`Error::Json`]; a decoded
/// string goes through the strict parser so its typed error is kept.
pub(crate) fn from_json<T: Rfc3339>(text: &str) -> Result<T> {
    let decoded: Option<String> = serde_json::from_str(text).map_err(Error::json)?;
    match decoded.as_deref() {
        None | Some("") => Ok(T::default()),
        Some(input) => T::parse_rfc3339(input),
    }
}
