//! Assembly of chrono values from grammar captures.
//!
//! Impossible combinations (month `13`, `02-31`, hour `24`, second `60`,
//! offsets of a day or more) come back as `None`; nothing is normalized or
//! carried into the next field.

use crate::fields::{to_integer, to_nanoseconds};
use crate::grammar::{DateTimeCaptures, FullDateCaptures, OffsetCapture};
use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};

/// Resolves an offset capture into signed seconds east of UTC.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::construct::offset_seconds;
/// use rfc3339_time::grammar::OffsetCapture;
///
/// assert_eq!(offset_seconds(OffsetCapture::Zulu), Some(0));
/// assert_eq!(offset_seconds(OffsetCapture::Numeric("-04:00")), Some(-14_400));
/// assert_eq!(offset_seconds(OffsetCapture::Numeric("+05:30")), Some(19_800));
/// ```
#[must_use]
pub fn offset_seconds(offset: OffsetCapture<'_>) -> Option<i32> {
    let numeric = match offset {
        OffsetCapture::Zulu => return Some(0),
        OffsetCapture::Numeric(numeric) => numeric,
    };

    let hours = to_integer(numeric.get(1..3)?) as i32;
    let minutes = to_integer(numeric.get(4..6)?) as i32;
    let seconds = (hours * 60 + minutes) * 60;
    if numeric.starts_with('-') {
        Some(-seconds)
    } else {
        Some(seconds)
    }
}

/// Builds a `date-time` instant from its captures.
#[must_use]
pub fn build_date_time(caps: &DateTimeCaptures<'_>) -> Option<chrono::DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset_seconds(caps.offset)?)?;
    let date = NaiveDate::from_ymd_opt(
        to_integer(caps.year) as i32,
        to_integer(caps.month),
        to_integer(caps.day),
    )?;
    let time = NaiveTime::from_hms_nano_opt(
        to_integer(caps.hour),
        to_integer(caps.minute),
        to_integer(caps.second),
        caps.fraction.map_or(0, to_nanoseconds),
    )?;

    offset.from_local_datetime(&date.and_time(time)).single()
}

/// Builds a `full-date` from its captures.
#[must_use]
pub fn build_full_date(caps: &FullDateCaptures<'_>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        to_integer(caps.year) as i32,
        to_integer(caps.month),
        to_integer(caps.day),
    )
}
