//! Configuration options for rendering `date-time` values.
//!
//! This module provides types to customize [`DateTime`](crate::DateTime) output:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`Precision`]: How many fractional-second digits to emit
//! - [`UtcDesignator`]: How a zero UTC offset is written
//! - [`Separator`]: What sits between the date and the time
//!
//! The defaults produce the canonical form used by `Display`, serde and the
//! storage adapters. Output re-parses to the same instant (minus any precision
//! deliberately dropped) unless [`Separator::Space`] is chosen.
//!
//! ## Examples
//!
//! ```rust
//! use rfc3339_time::{DateTime, FormatOptions, Precision, UtcDesignator};
//!
//! let dt = DateTime::parse("2023-03-24T22:30:00.5Z").unwrap();
//!
//! assert_eq!(dt.format_with(&FormatOptions::new()), "2023-03-24T22:30:00.5Z");
//! assert_eq!(dt.format_with(&FormatOptions::millis()), "2023-03-24T22:30:00.500Z");
//!
//! let options = FormatOptions::new()
//!     .with_precision(Precision::Fixed(0))
//!     .with_utc_designator(UtcDesignator::Numeric);
//! assert_eq!(dt.format_with(&options), "2023-03-24T22:30:00+00:00");
//! ```

use crate::fields::MAX_FRACTION_DIGITS;

/// Number of fractional-second digits to emit.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::Precision;
///
/// assert_eq!(Precision::Auto.digits(120_000_000), 2);
/// assert_eq!(Precision::Auto.digits(0), 0);
/// assert_eq!(Precision::Fixed(3).digits(0), 3);
/// assert_eq!(Precision::Fixed(12).digits(0), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Precision {
    /// As many digits as needed, trailing zeros trimmed; none when zero.
    #[default]
    Auto,
    /// Exactly this many digits (capped at 9), truncating finer precision.
    Fixed(u8),
}

impl Precision {
    /// Returns the number of digits this precision emits for `nanos`.
    #[must_use]
    pub fn digits(self, nanos: u32) -> usize {
        match self {
            Precision::Auto => {
                if nanos == 0 {
                    return 0;
                }
                let mut digits = MAX_FRACTION_DIGITS;
                let mut n = nanos;
                while n % 10 == 0 {
                    n /= 10;
                    digits -= 1;
                }
                digits
            }
            Precision::Fixed(n) => usize::from(n).min(MAX_FRACTION_DIGITS),
        }
    }
}

/// How a zero UTC offset is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UtcDesignator {
    /// `Z`
    #[default]
    Z,
    /// `+00:00`
    Numeric,
}

/// The character written between the date and the time.
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::Separator;
///
/// assert_eq!(Separator::default().as_char(), 'T');
/// assert!(Separator::LowerT.round_trips());
/// assert!(!Separator::Space.round_trips());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Separator {
    /// `T`
    #[default]
    T,
    /// `t`
    LowerT,
    /// A single space. Readable, but not accepted by the parser.
    Space,
}

impl Separator {
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Separator::T => 'T',
            Separator::LowerT => 't',
            Separator::Space => ' ',
        }
    }

    /// Returns `true` if output using this separator parses back.
    #[inline]
    #[must_use]
    pub const fn round_trips(self) -> bool {
        !matches!(self, Separator::Space)
    }
}

/// Configuration options for rendering a [`DateTime`](crate::DateTime).
///
/// # Examples
///
/// ```rust
/// use rfc3339_time::{FormatOptions, Precision, Separator};
///
/// // Canonical output
/// let options = FormatOptions::new();
/// assert_eq!(options.precision, Precision::Auto);
///
/// // Always nine fractional digits
/// let options = FormatOptions::nanos();
/// assert_eq!(options.precision, Precision::Fixed(9));
///
/// // Custom configuration
/// let options = FormatOptions::new()
///     .with_precision(Precision::Fixed(6))
///     .with_separator(Separator::LowerT);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub precision: Precision,
    pub utc_designator: UtcDesignator,
    pub separator: Separator,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            precision: Precision::default(),
            utc_designator: UtcDesignator::default(),
            separator: Separator::default(),
        }
    }
}

impl FormatOptions {
    /// Creates the canonical options (trimmed fraction, `Z`, `T` separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options emitting exactly three fractional digits.
    #[must_use]
    pub fn millis() -> Self {
        FormatOptions {
            precision: Precision::Fixed(3),
            ..Default::default()
        }
    }

    /// Creates options emitting exactly nine fractional digits.
    #[must_use]
    pub fn nanos() -> Self {
        FormatOptions {
            precision: Precision::Fixed(9),
            ..Default::default()
        }
    }

    /// Sets the fractional-second precision.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Sets how a zero UTC offset is written.
    #[must_use]
    pub fn with_utc_designator(mut self, designator: UtcDesignator) -> Self {
        self.utc_designator = designator;
        self
    }

    /// Sets the date/time separator.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }
}
