// ============================================================================
// Decimal Errors
// Error types for decimal parsing and arithmetic
// ============================================================================

use std::fmt;

/// What went wrong with a decimal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input text is not a well-formed decimal
    Syntax,
    /// A value or intermediate result left the unsigned 64-bit range
    Range,
    /// Operation attempted on an unparsed (default) value
    NotValid,
}

impl ErrorKind {
    const fn message(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "invalid syntax",
            ErrorKind::Range => "value out of range",
            ErrorKind::NotValid => "value is not valid",
        }
    }
}

/// A failed decimal operation: which operation, on what input, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalError {
    kind: ErrorKind,
    op: &'static str,
    input: String,
}

impl DecimalError {
    pub(crate) fn new(kind: ErrorKind, op: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            op,
            input: input.into(),
        }
    }

    pub(crate) fn syntax(op: &'static str, input: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, op, input)
    }

    pub(crate) fn range(op: &'static str, input: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, op, input)
    }

    pub(crate) fn not_valid(op: &'static str, input: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotValid, op, input)
    }

    /// The error category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the logical operation that failed (`"parse"`, `"add"`, ...).
    #[inline]
    pub fn op(&self) -> &str {
        self.op
    }

    /// The offending input text.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "decimal {}: {:?}: {}",
            self.op,
            self.input,
            self.kind.message()
        )
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecimalError::syntax("parse", "12a");
        assert_eq!(err.to_string(), "decimal parse: \"12a\": invalid syntax");

        let err = DecimalError::range("add", "1.0 + 2.0");
        assert_eq!(
            err.to_string(),
            "decimal add: \"1.0 + 2.0\": value out of range"
        );

        let err = DecimalError::not_valid("sub", "0.0 - 0.0");
        assert_eq!(
            err.to_string(),
            "decimal sub: \"0.0 - 0.0\": value is not valid"
        );
    }

    #[test]
    fn test_error_accessors() {
        let err = DecimalError::range("parse", "18446744073709551616");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.op(), "parse");
        assert_eq!(err.input(), "18446744073709551616");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            DecimalError::syntax("parse", "x"),
            DecimalError::syntax("parse", "x")
        );
        assert_ne!(
            DecimalError::syntax("parse", "x"),
            DecimalError::range("parse", "x")
        );
    }
}
