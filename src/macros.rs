/// Builds a [`DateTime`](crate::DateTime) from a string literal.
///
/// Expands to [`DateTime::must_parse`](crate::DateTime::must_parse), so an
/// invalid literal panics at the call site.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::date_time;
///
/// let dt = date_time!("2023-04-04T12:30:00-04:00");
/// assert_eq!(dt.offset_seconds(), -14_400);
/// ```
#[macro_export]
macro_rules! date_time {
    ($input:literal) => {
        $crate::DateTime::must_parse($input)
    };
}

/// Builds a [`FullDate`](crate::FullDate) from a string literal.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::full_date;
///
/// let date = full_date!("2023-04-04");
/// assert_eq!(date.day(), 4);
/// ```
#[macro_export]
macro_rules! full_date {
    ($input:literal) => {
        $crate::FullDate::must_parse($input)
    };
}
