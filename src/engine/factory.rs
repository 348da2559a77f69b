// ============================================================================
// Calculator Factory
// Creates fraction calculators with proper configuration
// ============================================================================

use crate::domain::config::{ArithmeticConfig, OverflowPolicy, ZeroDenominatorPolicy};
use crate::engine::FractionCalculator;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Arithmetic configuration
///
/// # Returns
/// * `Result<FractionCalculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use fraction_arith::prelude::*;
///
/// let config = ArithmeticConfig::strict("grading");
/// let calc = create_from_config(config).unwrap();
/// assert_eq!(calc.label(), "grading");
/// ```
pub fn create_from_config(config: ArithmeticConfig) -> Result<FractionCalculator, String> {
    config.validate()?;

    Ok(FractionCalculator::new(config))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use fraction_arith::prelude::*;
///
/// let calc = FractionCalculatorBuilder::new("week1")
///     .reject_zero_denominators()
///     .reduce_results()
///     .build()
///     .unwrap();
///
/// let result = calc.multiply(Fraction::new(2, 3), Fraction::new(3, 2)).unwrap();
/// assert_eq!(result, Fraction::ONE);
/// ```
pub struct FractionCalculatorBuilder {
    config: ArithmeticConfig,
}

impl FractionCalculatorBuilder {
    /// Create a new builder with the permissive defaults
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: ArithmeticConfig::new(label),
        }
    }

    /// Fail on zero-denominator operands or results
    pub fn reject_zero_denominators(mut self) -> Self {
        self.config.zero_denominator = ZeroDenominatorPolicy::Reject;
        self
    }

    /// Fail on component overflow instead of wrapping
    pub fn checked_overflow(mut self) -> Self {
        self.config.overflow = OverflowPolicy::Checked;
        self
    }

    /// Reduce every result to lowest terms
    pub fn reduce_results(mut self) -> Self {
        self.config.reduce_results = true;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    /// Build the calculator
    pub fn build(self) -> Result<FractionCalculator, String> {
        create_from_config(self.config)
    }
}

// ============================================================================
// Preset Builders
// ============================================================================

impl FractionCalculatorBuilder {
    /// Strict preset: rejects zero denominators, checks overflow
    pub fn strict(label: impl Into<String>) -> Self {
        Self::new(label).reject_zero_denominators().checked_overflow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Fraction, FractionError};

    #[test]
    fn test_create_permissive_calculator() {
        let config = ArithmeticConfig::permissive("week1");
        let calc = create_from_config(config).unwrap();
        assert_eq!(calc.label(), "week1");
        assert_eq!(
            calc.add(Fraction::new(1, 0), Fraction::new(1, 0)),
            Ok(Fraction::new(2, 0))
        );
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = ArithmeticConfig::new("");
        assert!(create_from_config(config).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = FractionCalculatorBuilder::new("graded")
            .checked_overflow()
            .reduce_results();

        assert_eq!(builder.config().overflow, OverflowPolicy::Checked);
        assert_eq!(
            builder.config().zero_denominator,
            ZeroDenominatorPolicy::Accept
        );

        let calc = builder.build().unwrap();
        assert_eq!(
            calc.add(Fraction::new(1, 2), Fraction::new(1, 2)),
            Ok(Fraction::ONE)
        );
    }

    #[test]
    fn test_preset_builder() {
        let calc = FractionCalculatorBuilder::strict("strict").build().unwrap();

        assert_eq!(calc.config(), &ArithmeticConfig::strict("strict"));
        assert_eq!(
            calc.multiply(Fraction::new(1, 0), Fraction::ONE),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn test_builder_rejects_empty_label() {
        let result = FractionCalculatorBuilder::new("").build();
        assert!(result.is_err());
    }
}
