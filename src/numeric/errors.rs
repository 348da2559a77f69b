// ============================================================================
// Numeric Errors
// Error types for the checked and parsing fraction APIs
// ============================================================================

use std::fmt;

/// Errors reported by the opt-in strict fraction APIs.
///
/// The core `add` / `multiply` operations never produce these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FractionError {
    /// Result does not fit in an i64 component
    Overflow,
    /// Operand has a zero denominator and the active policy rejects it
    ZeroDenominator,
    /// Attempted to evaluate a degenerate fraction as a number
    DivisionByZero,
    /// Input string could not be parsed as a fraction
    InvalidInput,
    /// Configuration could not be loaded
    InvalidConfig,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::Overflow => {
                write!(f, "arithmetic overflow: component exceeded i64 range")
            },
            FractionError::ZeroDenominator => {
                write!(f, "zero denominator rejected by arithmetic policy")
            },
            FractionError::DivisionByZero => write!(f, "division by zero"),
            FractionError::InvalidInput => write!(f, "invalid input: could not parse fraction"),
            FractionError::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

impl std::error::Error for FractionError {}

/// Result type alias for fraction operations
pub type FractionResult<T> = Result<T, FractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FractionError::Overflow.to_string(),
            "arithmetic overflow: component exceeded i64 range"
        );
        assert_eq!(FractionError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            FractionError::ZeroDenominator.to_string(),
            "zero denominator rejected by arithmetic policy"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FractionError::Overflow, FractionError::Overflow);
        assert_ne!(FractionError::ZeroDenominator, FractionError::DivisionByZero);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(FractionError::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: could not parse fraction");
    }
}
