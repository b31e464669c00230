// ============================================================================
// Exactdec Library
// Exact fixed-point decimal arithmetic with carry/borrow propagation
// ============================================================================

//! # Exactdec
//!
//! An exact decimal arithmetic engine for money and measurement values.
//!
//! ## Features
//!
//! - **Exact decimal math** over unsigned 64-bit integer and fractional
//!   parts, with no floating point and no big integers
//! - **Checked everywhere**: overflow, malformed text, and dead values are
//!   reported as errors, never wrapped or panicked on
//! - **Atomic in-place operations**: a failed add or sub leaves the
//!   receiver untouched
//! - **Configurable separators** for parsing, plain rendering, and
//!   thousands-grouped rendering
//! - **Serde support** (optional) and exact `rust_decimal` conversions at
//!   API boundaries
//!
//! ## Example
//!
//! ```rust
//! use exactdec::prelude::*;
//!
//! let mut balance = Decimal::parse("1234.50").unwrap();
//! balance.add(&Decimal::parse("765.55").unwrap()).unwrap();
//! assert_eq!(balance.to_string(), "2000.05");
//! assert_eq!(balance.to_grouped_string(), "2,000.05");
//!
//! let fee = Decimal::parse("0.05").unwrap();
//! balance.sub(&fee).unwrap();
//! assert_eq!(balance.to_string(), "2000.0");
//! assert!(balance < Decimal::parse("2000.01").unwrap());
//!
//! // Overflow is an error, not a wrap, and the receiver is unchanged.
//! let mut top = Decimal::parse("18446744073709551615.0").unwrap();
//! let err = top.add(&Decimal::parse("1.0").unwrap()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Range);
//! assert_eq!(top.to_string(), "18446744073709551615.0");
//! ```

pub mod decimal;
pub mod format;

// Re-exports for convenience
pub mod prelude {
    pub use crate::decimal::{Decimal, DecimalError, DecimalResult, ErrorKind};
    pub use crate::format::{default_format, set_default_format, DecimalFormat};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_ledger() {
        let mut balance = Decimal::parse("0.0").unwrap();

        // Deposits and withdrawals arriving as text, applied in place.
        for entry in ["1500.00", "249.99", "-0.99", "8675309.1337"] {
            let amount = Decimal::parse(entry).unwrap();
            balance.add(&amount).unwrap();
        }
        balance.sub(&Decimal::parse("1000").unwrap()).unwrap();

        assert!(!balance.is_negative());
        assert_eq!(balance.to_string(), "8676058.1337");
        assert_eq!(balance.to_grouped_string(), "8,676,058.1337");

        // Draining past zero flips the sign, exactly.
        balance.sub(&Decimal::parse("9000000").unwrap()).unwrap();
        assert!(balance.is_negative());
        assert_eq!(balance.to_string(), "-323941.8663");

        // And returning the same amount cancels to an unsigned zero.
        balance.add(&Decimal::parse("323941.8663").unwrap()).unwrap();
        assert_eq!(balance.to_string(), "0.0");
        assert!(!balance.is_negative());
    }

    #[test]
    fn test_error_surface() {
        let err = Decimal::parse("12x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.op(), "parse");
        assert_eq!(err.input(), "12x");
        assert_eq!(err.to_string(), "decimal parse: \"12x\": invalid syntax");

        let err = Decimal::parse("18446744073709551616").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = Decimal::default()
            .checked_add(&Decimal::parse("1.0").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotValid);
    }

    #[test]
    fn test_explicit_format_flow() {
        let format = DecimalFormat::new()
            .with_decimal_separator(',')
            .with_grouping_separator(' ');
        assert!(format.validate().is_ok());

        let price = Decimal::parse_with("1234567,89", &format).unwrap();
        let tax = Decimal::parse_with("246913,58", &format).unwrap();
        let total = price.checked_add(&tax).unwrap();
        assert_eq!(total.to_string_with(&format), "1481481,47");
        assert_eq!(total.to_grouped_string_with(&format), "1 481 481,47");

        // The process default is untouched by explicit-format calls.
        assert_eq!(default_format(), DecimalFormat::new());
    }
}
