// ============================================================================
// Formatting Configuration
// Decimal and grouping separator symbols used by parsing and rendering
// ============================================================================

use parking_lot::RwLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator symbols consulted when parsing and rendering decimal text.
///
/// Pass a `DecimalFormat` explicitly to the `*_with` methods, or install one
/// process-wide with [`set_default_format`]. The defaults are `.` for the
/// decimal separator and `,` for thousands grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalFormat {
    /// Character separating the integer and fractional parts
    pub decimal_separator: char,

    /// Character inserted between 3-digit integer groups in grouped output
    pub grouping_separator: char,
}

impl DecimalFormat {
    /// The standard `.` / `,` format.
    pub const fn new() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }

    /// Builder method: Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder method: Set the grouping separator
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for separator in [self.decimal_separator, self.grouping_separator] {
            if separator.is_ascii_digit() {
                return Err("Separator cannot be a digit".to_string());
            }
            if separator == '+' || separator == '-' {
                return Err("Separator cannot be a sign character".to_string());
            }
        }
        if self.decimal_separator == self.grouping_separator {
            return Err("Decimal and grouping separators must differ".to_string());
        }
        Ok(())
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_FORMAT: RwLock<DecimalFormat> = RwLock::new(DecimalFormat::new());

/// The process-wide format used by `Display`, `FromStr`, and the non-`_with`
/// rendering methods.
pub fn default_format() -> DecimalFormat {
    *DEFAULT_FORMAT.read()
}

/// Replace the process-wide format. Rejects invalid configurations and
/// leaves the current default in place on error.
///
/// Changing the default while other threads are parsing or rendering is safe
/// but yields mixed output; configure once before concurrent use begins.
pub fn set_default_format(format: DecimalFormat) -> Result<(), String> {
    format.validate()?;
    *DEFAULT_FORMAT.write() = format;
    Ok(())
}
