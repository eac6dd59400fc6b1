//! Rendering of values to their RFC 3339 string forms.
//!
//! These are pure functions of the chrono value; zero-value handling for JSON
//! lives with the serde impls, not here.

use crate::fields::MAX_FRACTION_DIGITS;
use crate::options::{FormatOptions, UtcDesignator};
use chrono::{Datelike, FixedOffset, NaiveDate, Timelike};
use std::fmt::Write;

/// Renders a `date-time` string.
///
/// Offsets are written at minute resolution; a sub-minute component in a
/// wrapped chrono offset is dropped. Years outside `0000..=9999` in a wrapped
/// chrono value are written as chrono holds them (`-001`, `10000`), which the
/// four-digit grammar does not accept back.
pub fn render_date_time(dt: &chrono::DateTime<FixedOffset>, options: &FormatOptions) -> String {
    let mut out = String::with_capacity(35);
    write_date(&mut out, dt.year(), dt.month(), dt.day());
    out.push(options.separator.as_char());

    // Leap-second representations fold back into 0..=999_999_999.
    let nanos = dt.nanosecond() % 1_000_000_000;
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        dt.hour(),
        dt.minute(),
        dt.second()
    );

    let digits = options.precision.digits(nanos);
    if digits > 0 {
        let padded = format!("{:09}", nanos);
        out.push('.');
        out.push_str(&padded[..digits.min(MAX_FRACTION_DIGITS)]);
    }

    let offset = dt.offset().local_minus_utc();
    if offset == 0 && options.utc_designator == UtcDesignator::Z {
        out.push('Z');
    } else {
        let sign = if offset < 0 { '-' } else { '+' };
        let minutes = offset.unsigned_abs() / 60;
        let _ = write!(out, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60);
    }
    out
}

/// Renders a `full-date` string with every field zero-padded.
///
/// The same caveat about years outside `0000..=9999` applies.
pub fn render_full_date(date: &NaiveDate) -> String {
    let mut out = String::with_capacity(10);
    write_date(&mut out, date.year(), date.month(), date.day());
    out
}

fn write_date(out: &mut String, year: i32, month: u32, day: u32) {
    let _ = write!(out, "{:04}-{:02}-{:02}", year, month, day);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Precision, Separator};
    use chrono::TimeZone;

    fn fixed(offset: i32) -> FixedOffset {
        FixedOffset::east_opt(offset).unwrap()
    }

    #[test]
    fn test_render_trims_fraction() {
        let dt = fixed(-14400)
            .with_ymd_and_hms(2023, 4, 1, 11, 45, 0)
            .unwrap()
            .with_nanosecond(5_000_000)
            .unwrap();
        assert_eq!(
            render_date_time(&dt, &FormatOptions::new()),
            "2023-04-01T11:45:00.005-04:00"
        );
    }

    #[test]
    fn test_render_omits_zero_fraction() {
        let dt = fixed(-14400).with_ymd_and_hms(2023, 4, 1, 11, 45, 0).unwrap();
        assert_eq!(
            render_date_time(&dt, &FormatOptions::new()),
            "2023-04-01T11:45:00-04:00"
        );
    }

    #[test]
    fn test_render_utc() {
        let dt = fixed(0).with_ymd_and_hms(2023, 3, 24, 22, 30, 0).unwrap();
        assert_eq!(
            render_date_time(&dt, &FormatOptions::new()),
            "2023-03-24T22:30:00Z"
        );
        let numeric = FormatOptions::new().with_utc_designator(UtcDesignator::Numeric);
        assert_eq!(render_date_time(&dt, &numeric), "2023-03-24T22:30:00+00:00");
    }

    #[test]
    fn test_render_fixed_precision_truncates() {
        let dt = fixed(3600)
            .with_ymd_and_hms(2023, 3, 24, 22, 30, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let options = FormatOptions::new().with_precision(Precision::Fixed(4));
        assert_eq!(
            render_date_time(&dt, &options),
            "2023-03-24T22:30:00.1234+01:00"
        );
        assert_eq!(
            render_date_time(&dt, &FormatOptions::nanos()),
            "2023-03-24T22:30:00.123456789+01:00"
        );
    }

    #[test]
    fn test_render_half_hour_offset() {
        let dt = fixed(-(9 * 3600 + 30 * 60))
            .with_ymd_and_hms(2023, 3, 24, 22, 30, 0)
            .unwrap();
        assert_eq!(
            render_date_time(&dt, &FormatOptions::new()),
            "2023-03-24T22:30:00-09:30"
        );
    }

    #[test]
    fn test_render_separators() {
        let dt = fixed(0).with_ymd_and_hms(2023, 3, 24, 22, 30, 0).unwrap();
        let lower = FormatOptions::new().with_separator(Separator::LowerT);
        assert_eq!(render_date_time(&dt, &lower), "2023-03-24t22:30:00Z");
        let space = FormatOptions::new().with_separator(Separator::Space);
        assert_eq!(render_date_time(&dt, &space), "2023-03-24 22:30:00Z");
    }

    #[test]
    fn test_render_years_beyond_four_digits() {
        let date = NaiveDate::from_ymd_opt(10000, 1, 2).unwrap();
        let rendered = render_full_date(&date);
        assert_eq!(rendered, "10000-01-02");
        assert!(!crate::is_full_date_string(&rendered));

        let dt = fixed(0).with_ymd_and_hms(-1, 1, 2, 0, 0, 0).unwrap();
        let rendered = render_date_time(&dt, &FormatOptions::new());
        assert_eq!(rendered, "-001-01-02T00:00:00Z");
        assert!(!crate::is_date_time_string(&rendered));
    }

    #[test]
    fn test_render_full_date_pads_year() {
        let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
        assert_eq!(render_full_date(&date), "0001-01-01");
        let date = NaiveDate::from_ymd_opt(987, 12, 9).unwrap();
        assert_eq!(render_full_date(&date), "0987-12-09");
    }
}
