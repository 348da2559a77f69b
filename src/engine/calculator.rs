// ============================================================================
// Fraction Calculator
// Applies an arithmetic configuration to the core operations
// ============================================================================

use crate::domain::{ArithmeticConfig, Operation, OverflowPolicy, ZeroDenominatorPolicy};
use crate::numeric::{add, multiply, Fraction, FractionError, FractionResult};
use std::sync::atomic::{AtomicU64, Ordering};

/// Fraction calculator with configurable strictness
pub struct FractionCalculator {
    /// Policies applied to every evaluation
    config: ArithmeticConfig,

    /// Count of successful evaluations
    evaluation_counter: AtomicU64,

    /// Count of evaluations refused by a policy
    rejection_counter: AtomicU64,
}

impl FractionCalculator {
    /// Create a new calculator
    pub fn new(config: ArithmeticConfig) -> Self {
        tracing::debug!(
            "Fraction calculator '{}' created: zero denominators {:?}, overflow {:?}, reduce {}",
            config.label,
            config.zero_denominator,
            config.overflow,
            config.reduce_results
        );

        Self {
            config,
            evaluation_counter: AtomicU64::new(0),
            rejection_counter: AtomicU64::new(0),
        }
    }

    /// Evaluate `lhs <operation> rhs` under the configured policies.
    ///
    /// # Errors
    /// - `ZeroDenominator` if an operand or the result is degenerate under `Reject`
    /// - `Overflow` if a component overflows under `Checked`
    pub fn evaluate(
        &self,
        operation: Operation,
        lhs: Fraction,
        rhs: Fraction,
    ) -> FractionResult<Fraction> {
        let outcome = self.compute(operation, lhs, rhs);

        match outcome {
            Ok(result) => {
                self.evaluation_counter.fetch_add(1, Ordering::AcqRel);
                tracing::debug!(
                    "[{}] {} {} {} = {}",
                    self.config.label,
                    lhs,
                    operation,
                    rhs,
                    result
                );
            }
            Err(error) => {
                self.rejection_counter.fetch_add(1, Ordering::AcqRel);
                tracing::warn!(
                    "[{}] {} {} {} rejected: {}",
                    self.config.label,
                    lhs,
                    operation,
                    rhs,
                    error
                );
            }
        }

        outcome
    }

    /// Shorthand for `evaluate(Operation::Add, ..)`
    pub fn add(&self, lhs: Fraction, rhs: Fraction) -> FractionResult<Fraction> {
        self.evaluate(Operation::Add, lhs, rhs)
    }

    /// Shorthand for `evaluate(Operation::Multiply, ..)`
    pub fn multiply(&self, lhs: Fraction, rhs: Fraction) -> FractionResult<Fraction> {
        self.evaluate(Operation::Multiply, lhs, rhs)
    }

    /// Fold operands left to right, starting from the operation's identity.
    ///
    /// Stops at the first rejected step.
    pub fn fold<I>(&self, operation: Operation, operands: I) -> FractionResult<Fraction>
    where
        I: IntoIterator<Item = Fraction>,
    {
        operands
            .into_iter()
            .try_fold(operation.identity(), |acc, operand| {
                self.evaluate(operation, acc, operand)
            })
    }

    /// Number of successful evaluations so far
    pub fn evaluations(&self) -> u64 {
        self.evaluation_counter.load(Ordering::Acquire)
    }

    /// Number of rejected evaluations so far
    pub fn rejections(&self) -> u64 {
        self.rejection_counter.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    fn compute(
        &self,
        operation: Operation,
        lhs: Fraction,
        rhs: Fraction,
    ) -> FractionResult<Fraction> {
        let reject_degenerate = self.config.zero_denominator == ZeroDenominatorPolicy::Reject;

        if reject_degenerate && (lhs.is_degenerate() || rhs.is_degenerate()) {
            return Err(FractionError::ZeroDenominator);
        }

        let result = match (operation, self.config.overflow) {
            (Operation::Add, OverflowPolicy::Wrapping) => add(lhs, rhs),
            (Operation::Multiply, OverflowPolicy::Wrapping) => multiply(lhs, rhs),
            (Operation::Add, OverflowPolicy::Checked) => lhs.checked_add(rhs)?,
            (Operation::Multiply, OverflowPolicy::Checked) => lhs.checked_mul(rhs)?,
        };

        // A wrapped denominator can land on zero
        if reject_degenerate && result.is_degenerate() {
            return Err(FractionError::ZeroDenominator);
        }

        match (self.config.reduce_results, self.config.overflow) {
            (false, _) => Ok(result),
            (true, OverflowPolicy::Wrapping) => Ok(result.reduced()),
            (true, OverflowPolicy::Checked) => result.checked_reduced(),
        }
    }
}
