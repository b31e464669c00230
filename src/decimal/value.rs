// ============================================================================
// Decimal Value
// Exact decimal arithmetic over unsigned 64-bit integer and fractional parts
// ============================================================================

use std::fmt::{self, Write as _};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::digits;
use super::errors::{DecimalError, DecimalResult, ErrorKind};
use crate::format::{self, DecimalFormat};

/// An exact decimal number.
///
/// Conceptually `sign × (integer + fraction / 10^fraction_digits)`. Both
/// parts are plain `u64` values; the fractional digit width is tracked
/// separately so that leading fractional zeros survive (`"1.05"` stores
/// fraction `5` at width `2`). No floating point is involved anywhere, and
/// no arithmetic step is allowed to wrap: anything that would leave the
/// unsigned 64-bit range is reported as a range error instead.
///
/// Values are created by [`Decimal::parse`] (or `str::parse`), returned by
/// the checked arithmetic methods, or converted from a
/// [`rust_decimal::Decimal`] at an API boundary. The [`Default`] value is
/// a dead value: every operation rejects it with
/// [`ErrorKind::NotValid`](super::ErrorKind::NotValid).
///
/// # Example
/// ```
/// use exactdec::decimal::Decimal;
///
/// let mut total = Decimal::parse("111.555").unwrap();
/// total.add(&Decimal::parse("111.666").unwrap()).unwrap();
/// assert_eq!(total.to_string(), "223.221");
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decimal {
    valid: bool,
    negative: bool,
    integer: u64,
    fraction: u64,
    fraction_digits: u32,
}

// ============================================================================
// Parsing
// ============================================================================

impl Decimal {
    /// Parse decimal text using the process-default [`DecimalFormat`].
    ///
    /// Accepted form: an optional leading `+` or `-`, a run of ASCII digits,
    /// and optionally one decimal separator followed by a run of ASCII
    /// digits. Either digit run may be empty, but not both. The fractional
    /// text is preserved exactly: `"1.50"` keeps its two-digit width.
    ///
    /// # Errors
    /// `Syntax` for malformed text, `Range` when a part exceeds `u64::MAX`.
    /// No partial value is ever produced.
    pub fn parse(text: &str) -> DecimalResult<Self> {
        Self::parse_with(text, &format::default_format())
    }

    /// Parse decimal text with an explicit separator configuration.
    pub fn parse_with(text: &str, format: &DecimalFormat) -> DecimalResult<Self> {
        const OP: &str = "parse";

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let mut integer: u64 = 0;
        let mut fraction: u64 = 0;
        let mut fraction_digits: Option<u32> = None;
        let mut seen_digit = false;

        for c in body.chars() {
            if let Some(digit) = c.to_digit(10) {
                let target = match fraction_digits.as_mut() {
                    None => &mut integer,
                    Some(count) => {
                        *count += 1;
                        &mut fraction
                    }
                };
                *target = target
                    .checked_mul(10)
                    .and_then(|shifted| shifted.checked_add(u64::from(digit)))
                    .ok_or_else(|| DecimalError::range(OP, text))?;
                seen_digit = true;
            } else if c == format.decimal_separator && fraction_digits.is_none() {
                fraction_digits = Some(0);
            } else {
                return Err(DecimalError::syntax(OP, text));
            }
        }

        if !seen_digit {
            return Err(DecimalError::syntax(OP, text));
        }

        Ok(Self {
            valid: true,
            // zero never carries a sign
            negative: negative && (integer != 0 || fraction != 0),
            integer,
            fraction,
            fraction_digits: fraction_digits.unwrap_or(0),
        })
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Decimal {
    /// Whether this value was produced by a successful parse or operation.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Sign flag. Never set when the magnitude is exactly zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if the magnitude is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.integer == 0 && self.fraction == 0
    }

    /// The digits left of the decimal separator.
    #[inline]
    pub const fn integer_part(&self) -> u64 {
        self.integer
    }

    /// The digits right of the decimal separator, as the integer they form.
    #[inline]
    pub const fn fractional_part(&self) -> u64 {
        self.fraction
    }

    /// Printed width of the fractional part; `0` when none was present.
    #[inline]
    pub const fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Decimal {
    /// Checked addition, returning a new value.
    ///
    /// # Errors
    /// `NotValid` if either operand is unparsed; `Range` if any component
    /// (including the width-alignment scaling and the carry into the integer
    /// part) would leave `u64` range.
    pub fn checked_add(&self, rhs: &Self) -> DecimalResult<Self> {
        if !(self.valid && rhs.valid) {
            return Err(self.op_error(rhs, "add", '+', ErrorKind::NotValid));
        }
        self.add_inner(rhs)
            .ok_or_else(|| self.op_error(rhs, "add", '+', ErrorKind::Range))
    }

    /// Checked subtraction, returning a new value.
    ///
    /// # Errors
    /// Same surface as [`checked_add`](Self::checked_add).
    pub fn checked_sub(&self, rhs: &Self) -> DecimalResult<Self> {
        if !(self.valid && rhs.valid) {
            return Err(self.op_error(rhs, "sub", '-', ErrorKind::NotValid));
        }
        let result = if self.negative == rhs.negative {
            self.sub_inner(rhs)
        } else {
            // Subtracting an opposite-signed value adds its magnitude. The
            // flip happens on a copy; `rhs` is never touched.
            let addend = Self {
                negative: self.negative,
                ..*rhs
            };
            self.add_inner(&addend)
        };
        result.ok_or_else(|| self.op_error(rhs, "sub", '-', ErrorKind::Range))
    }

    /// In-place addition: `*self = *self + rhs`.
    ///
    /// The receiver is replaced only on success and is left unchanged on
    /// any error.
    pub fn add(&mut self, rhs: &Self) -> DecimalResult<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// In-place subtraction: `*self = *self - rhs`.
    ///
    /// The receiver is replaced only on success and is left unchanged on
    /// any error.
    pub fn sub(&mut self, rhs: &Self) -> DecimalResult<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    fn add_inner(&self, rhs: &Self) -> Option<Self> {
        let width = self.fraction_digits.max(rhs.fraction_digits);
        let lhs_frac = align_fraction(self.fraction, width - self.fraction_digits)?;
        let rhs_frac = align_fraction(rhs.fraction, width - rhs.fraction_digits)?;

        if self.negative == rhs.negative {
            let fraction = lhs_frac.checked_add(rhs_frac)?;
            let integer = self.integer.checked_add(rhs.integer)?;
            let (integer, fraction) = carry_fraction(integer, fraction, width)?;
            return Some(Self::commit(self.negative, integer, fraction, width));
        }

        // Opposite signs cancel: subtract the smaller magnitude from the
        // larger; the result takes the sign of the larger-magnitude operand.
        let (swapped, integer, fraction) =
            diff_magnitudes((self.integer, lhs_frac), (rhs.integer, rhs_frac), width)?;
        let negative = if swapped { rhs.negative } else { self.negative };
        Some(Self::commit(negative, integer, fraction, width))
    }

    // Same-sign subtraction; opposite signs are routed through add_inner.
    fn sub_inner(&self, rhs: &Self) -> Option<Self> {
        let width = self.fraction_digits.max(rhs.fraction_digits);
        let lhs_frac = align_fraction(self.fraction, width - self.fraction_digits)?;
        let rhs_frac = align_fraction(rhs.fraction, width - rhs.fraction_digits)?;

        let (swapped, integer, fraction) =
            diff_magnitudes((self.integer, lhs_frac), (rhs.integer, rhs_frac), width)?;
        let negative = if swapped { !self.negative } else { self.negative };
        Some(Self::commit(negative, integer, fraction, width))
    }

    // Normalize and assemble a finished arithmetic result.
    fn commit(negative: bool, integer: u64, fraction: u64, width: u32) -> Self {
        let negative = negative && (integer != 0 || fraction != 0);
        let (fraction, fraction_digits) = simplify_fraction(fraction, width);
        Self {
            valid: true,
            negative,
            integer,
            fraction,
            fraction_digits,
        }
    }

    fn op_error(&self, rhs: &Self, op: &'static str, symbol: char, kind: ErrorKind) -> DecimalError {
        let input = format!("{} {} {}", self, symbol, rhs);
        tracing::debug!(op, input = %input, kind = ?kind, "decimal operation failed");
        DecimalError::new(kind, op, input)
    }
}

/// Scale `fraction` up by `10^shift` so both operands share a digit width.
fn align_fraction(fraction: u64, shift: u32) -> Option<u64> {
    if fraction == 0 {
        return Some(0);
    }
    fraction.checked_mul(digits::pow10(shift)?)
}

/// Propagate a fractional sum that overflowed its digit slot into the
/// integer part. The divisor derives from the aligned width; the sum of two
/// in-slot fractions is at most one digit wider, so the divisor always fits.
fn carry_fraction(integer: u64, fraction: u64, width: u32) -> Option<(u64, u64)> {
    if fraction == 0 || digits::printed_length(fraction) <= width {
        return Some((integer, fraction));
    }
    let modulus = digits::pow10(width)?;
    let integer = integer.checked_add(fraction / modulus)?;
    Some((integer, fraction % modulus))
}

/// Component-wise magnitude difference of two width-aligned operands.
/// Returns `(swapped, integer, fraction)`; `swapped` is set when `rhs` had
/// the larger magnitude and the roles were exchanged to keep the unsigned
/// subtraction non-negative.
fn diff_magnitudes(lhs: (u64, u64), rhs: (u64, u64), width: u32) -> Option<(bool, u64, u64)> {
    let swapped = lhs < rhs;
    let ((big_int, big_frac), (small_int, small_frac)) =
        if swapped { (rhs, lhs) } else { (lhs, rhs) };

    if big_frac >= small_frac {
        return Some((swapped, big_int - small_int, big_frac - small_frac));
    }

    // Borrow one integer unit into the fractional slot. `small_frac` stays
    // below 10^width, so the borrowed fraction stays below the slot; the
    // magnitude ordering guarantees `big_int > small_int` here.
    let slot = digits::pow10(width)?;
    let fraction = (slot - small_frac) + big_frac;
    Some((swapped, big_int - small_int - 1, fraction))
}

/// Strip trailing zero digits from a result fraction, shrinking the width by
/// exactly the number of digits removed so significant leading zeros keep
/// their place. A zero fraction renders as a single `0` digit.
fn simplify_fraction(fraction: u64, width: u32) -> (u64, u32) {
    if fraction == 0 {
        return (0, 1);
    }
    let (reduced, reduced_length) = digits::simplify(fraction);
    let stripped = digits::printed_length(fraction) - reduced_length;
    (reduced, width - stripped)
}

// ============================================================================
// Comparison
// ============================================================================
//
// Ordering compares the sign, then the integer parts, then the raw
// fractional parts. The fractional parts are NOT width-aligned: "1.5" and
// "1.50" parse to fractions 5 and 50 and compare accordingly. Values
// produced by arithmetic are always simplified and therefore comparable;
// mixing simplified and unsimplified values in ordered collections is a
// documented limitation of the representation.

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.negative == other.negative {
            let magnitude = (self.integer, self.fraction).cmp(&(other.integer, other.fraction));
            if self.negative {
                magnitude.reverse()
            } else {
                magnitude
            }
        } else if self.negative {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        }
    }
}

impl std::hash::Hash for Decimal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.integer.hash(state);
        self.fraction.hash(state);
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl Decimal {
    /// Render with an explicit format. Same output as `Display` otherwise.
    pub fn to_string_with(&self, format: &DecimalFormat) -> String {
        let mut out = String::with_capacity(24);
        self.write_plain(&mut out, format)
            .expect("writing to a String cannot fail");
        out
    }

    /// Render with the integer part grouped into 3-digit clusters, using the
    /// process-default format.
    ///
    /// ```
    /// use exactdec::decimal::Decimal;
    ///
    /// let value = Decimal::parse("1234567890.01").unwrap();
    /// assert_eq!(value.to_grouped_string(), "1,234,567,890.01");
    /// ```
    pub fn to_grouped_string(&self) -> String {
        self.to_grouped_string_with(&format::default_format())
    }

    /// Grouped rendering with an explicit format.
    pub fn to_grouped_string_with(&self, format: &DecimalFormat) -> String {
        if self.integer < 1000 {
            return self.to_string_with(format);
        }

        let integer_digits = self.integer.to_string();
        let mut out = String::with_capacity(
            integer_digits.len() + integer_digits.len() / 3 + self.fraction_digits as usize + 3,
        );
        if self.negative {
            out.push('-');
        }
        for (i, digit) in integer_digits.chars().enumerate() {
            if i != 0 && (integer_digits.len() - i) % 3 == 0 {
                out.push(format.grouping_separator);
            }
            out.push(digit);
        }
        out.push(format.decimal_separator);
        write!(out, "{:0width$}", self.fraction, width = self.fraction_digits as usize)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_plain<W: fmt::Write>(&self, out: &mut W, format: &DecimalFormat) -> fmt::Result {
        if self.negative {
            out.write_char('-')?;
        }
        write!(
            out,
            "{}{}{:0width$}",
            self.integer,
            format.decimal_separator,
            self.fraction,
            width = self.fraction_digits as usize
        )
    }
}

impl fmt::Display for Decimal {
    /// Plain rendering: `[-]INTEGER<sep>FRACTION`, the fraction zero-padded
    /// to its recorded width. A value parsed without a fractional part still
    /// prints one fractional digit: `"123"` renders as `"123.0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_plain(f, &format::default_format())
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl Decimal {
    /// Convert from [`rust_decimal::Decimal`], exactly.
    ///
    /// Intended for API boundaries where input arrives as `rust_decimal`.
    /// The scale is preserved as the fractional width.
    ///
    /// # Errors
    /// `Range` if either part does not fit in a `u64`.
    pub fn from_decimal(value: rust_decimal::Decimal) -> DecimalResult<Self> {
        const OP: &str = "from_decimal";

        let mantissa = value.mantissa();
        let magnitude = mantissa.unsigned_abs();
        let slot = 10u128.pow(value.scale());

        let integer = u64::try_from(magnitude / slot)
            .map_err(|_| DecimalError::range(OP, value.to_string()))?;
        let fraction = u64::try_from(magnitude % slot)
            .map_err(|_| DecimalError::range(OP, value.to_string()))?;

        Ok(Self {
            valid: true,
            negative: mantissa < 0 && (integer != 0 || fraction != 0),
            integer,
            fraction,
            fraction_digits: value.scale(),
        })
    }

    /// Convert to [`rust_decimal::Decimal`], exactly.
    ///
    /// # Errors
    /// `NotValid` for an unparsed value; `Range` when the combined mantissa
    /// or the fractional width exceeds what `rust_decimal` can represent.
    pub fn to_decimal(&self) -> DecimalResult<rust_decimal::Decimal> {
        const OP: &str = "to_decimal";

        if !self.valid {
            return Err(DecimalError::not_valid(OP, self.to_string()));
        }

        let mantissa = 10i128
            .checked_pow(self.fraction_digits)
            .and_then(|slot| (self.integer as i128).checked_mul(slot))
            .and_then(|scaled| scaled.checked_add(self.fraction as i128))
            .ok_or_else(|| DecimalError::range(OP, self.to_string()))?;
        let mantissa = if self.negative { -mantissa } else { mantissa };

        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.fraction_digits)
            .map_err(|_| DecimalError::range(OP, self.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
