// ============================================================================
// Fraction Arithmetic Library
// Unreduced numerator/denominator arithmetic with configurable strictness
// ============================================================================

//! # Fraction Arithmetic
//!
//! Integer fractions stored as raw `numerator/denominator` pairs.
//!
//! ## Features
//!
//! - **Total core operations**: [`numeric::add`] and [`numeric::multiply`]
//!   never fail, never panic, and never reduce
//! - **Degenerate fractions**: zero and negative denominators are representable
//! - **Opt-in strictness** through [`engine::FractionCalculator`] policies
//! - **Evaluation logging** through `tracing`
//!
//! ## Example
//!
//! ```rust
//! use fraction_arith::prelude::*;
//!
//! // The core operations work directly on values
//! let sum = add(Fraction::new(2, 3), Fraction::new(4, 5));
//! assert_eq!(sum, Fraction::new(22, 15));
//!
//! // A strict calculator rejects degenerate operands
//! let calc = FractionCalculatorBuilder::strict("grading")
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     calc.add(Fraction::new(1, 0), Fraction::ONE),
//!     Err(FractionError::ZeroDenominator)
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ArithmeticConfig, Operation, OverflowPolicy, ZeroDenominatorPolicy};
    pub use crate::engine::{create_from_config, FractionCalculator, FractionCalculatorBuilder};
    pub use crate::numeric::{add, multiply, Fraction, FractionError, FractionResult};
}
