// ============================================================================
// Arithmetic Configuration
// Strictness policies applied by the calculator engine
// ============================================================================

#[cfg(feature = "serde")]
use crate::numeric::{FractionError, FractionResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Zero Denominator Policy
// ============================================================================

/// How operands with a zero denominator are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroDenominatorPolicy {
    /// Degenerate operands pass through and propagate into the result
    #[default]
    Accept,

    /// Degenerate operands fail with `FractionError::ZeroDenominator`
    Reject,
}

// ============================================================================
// Overflow Policy
// ============================================================================

/// How component overflow is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Components wrap around (two's complement)
    #[default]
    Wrapping,

    /// Overflow fails with `FractionError::Overflow`
    Checked,
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Configuration for creating a fraction calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Name used in log output (e.g., "week1", "grading")
    pub label: String,

    /// Treatment of zero denominators
    #[cfg_attr(feature = "serde", serde(default))]
    pub zero_denominator: ZeroDenominatorPolicy,

    /// Treatment of component overflow
    #[cfg_attr(feature = "serde", serde(default))]
    pub overflow: OverflowPolicy,

    /// Reduce every result to lowest terms
    #[cfg_attr(feature = "serde", serde(default))]
    pub reduce_results: bool,
}

impl ArithmeticConfig {
    /// Create a configuration with the permissive defaults
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            zero_denominator: ZeroDenominatorPolicy::Accept,
            overflow: OverflowPolicy::Wrapping,
            reduce_results: false,
        }
    }

    /// Builder method: Set zero denominator policy
    pub fn with_zero_denominator(mut self, policy: ZeroDenominatorPolicy) -> Self {
        self.zero_denominator = policy;
        self
    }

    /// Builder method: Set overflow policy
    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// Builder method: Reduce results to lowest terms
    pub fn with_reduced_results(mut self, reduce: bool) -> Self {
        self.reduce_results = reduce;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Label cannot be empty".to_string());
        }

        Ok(())
    }

    /// Load a configuration from JSON.
    ///
    /// Policy fields are optional and fall back to the permissive defaults.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the document does not parse or fails validation.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> FractionResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            tracing::warn!("Rejected arithmetic config: {}", err);
            FractionError::InvalidConfig
        })?;

        config.validate().map_err(|reason| {
            tracing::warn!("Rejected arithmetic config: {}", reason);
            FractionError::InvalidConfig
        })?;

        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ArithmeticConfig {
    /// Plain unreduced arithmetic
    /// - Zero denominators accepted
    /// - Wrapping overflow
    pub fn permissive(label: impl Into<String>) -> Self {
        Self::new(label)
    }

    /// Strict arithmetic
    /// - Zero denominators rejected
    /// - Checked overflow
    /// - Results still unreduced
    pub fn strict(label: impl Into<String>) -> Self {
        Self::new(label)
            .with_zero_denominator(ZeroDenominatorPolicy::Reject)
            .with_overflow(OverflowPolicy::Checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ArithmeticConfig::new("week1");

        assert_eq!(config.label, "week1");
        assert_eq!(config.zero_denominator, ZeroDenominatorPolicy::Accept);
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);
        assert!(!config.reduce_results);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArithmeticConfig::new("grading")
            .with_overflow(OverflowPolicy::Checked)
            .with_reduced_results(true);

        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.zero_denominator, ZeroDenominatorPolicy::Accept);
        assert!(config.reduce_results);
    }

    #[test]
    fn test_validation() {
        assert!(ArithmeticConfig::new("").validate().is_err());
        assert!(ArithmeticConfig::new("   ").validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(
            ArithmeticConfig::permissive("p"),
            ArithmeticConfig::new("p")
        );

        let strict = ArithmeticConfig::strict("s");
        assert_eq!(strict.zero_denominator, ZeroDenominatorPolicy::Reject);
        assert_eq!(strict.overflow, OverflowPolicy::Checked);
        assert!(!strict.reduce_results);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = ArithmeticConfig::from_json(
            r#"{"label": "strict", "zero_denominator": "Reject", "overflow": "Checked"}"#,
        )
        .unwrap();
        assert_eq!(config, ArithmeticConfig::strict("strict"));

        let minimal = ArithmeticConfig::from_json(r#"{"label": "plain"}"#).unwrap();
        assert_eq!(minimal, ArithmeticConfig::new("plain"));

        assert_eq!(
            ArithmeticConfig::from_json(r#"{"label": ""}"#),
            Err(FractionError::InvalidConfig)
        );
        assert_eq!(
            ArithmeticConfig::from_json("not json"),
            Err(FractionError::InvalidConfig)
        );
    }
}
