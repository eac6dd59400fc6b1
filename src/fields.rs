//! Conversion of captured digit strings into exact integers.
//!
//! Both functions are total: they only ever see digit strings that already
//! passed one of the [`crate::grammar`] matchers.

/// Nanosecond resolution, in fractional digits.
pub const MAX_FRACTION_DIGITS: usize = 9;

/// Converts a fixed-width decimal field such as `"08"` into an integer.
///
/// At most one leading `0` is stripped before parsing; the grammar caps
/// fields at four digits so that is always enough.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::fields::to_integer;
///
/// assert_eq!(to_integer("00"), 0);
/// assert_eq!(to_integer("08"), 8);
/// assert_eq!(to_integer("12"), 12);
/// assert_eq!(to_integer("2023"), 2023);
/// ```
#[must_use]
pub fn to_integer(digits: &str) -> u32 {
    let digits = digits.strip_prefix('0').unwrap_or(digits);
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(0)
}

/// Converts a fractional-second capture such as `".005"` into nanoseconds.
///
/// Only the first nine digits are kept; anything finer is discarded, never
/// rounded. Fewer than nine digits are scaled up as if right-padded with
/// zeros. The leading `.` is optional and an empty input yields `0`.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::fields::to_nanoseconds;
///
/// assert_eq!(to_nanoseconds(".005"), 5_000_000);
/// assert_eq!(to_nanoseconds(".5"), 500_000_000);
/// assert_eq!(to_nanoseconds(".1234567891"), 123_456_789);
/// ```
#[must_use]
pub fn to_nanoseconds(fraction: &str) -> u32 {
    let digits = fraction.strip_prefix('.').unwrap_or(fraction);
    let kept = digits
        .get(..digits.len().min(MAX_FRACTION_DIGITS))
        .unwrap_or(digits);
    if kept.is_empty() {
        return 0;
    }

    match kept.parse::<u32>() {
        Ok(value) => value * 10u32.pow(MAX_FRACTION_DIGITS.saturating_sub(kept.len()) as u32),
        Err(_) => 0,
    }
}
