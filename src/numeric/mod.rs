// ============================================================================
// Numeric Module
// Integer fraction arithmetic without automatic normalization
// ============================================================================
//
// This module provides:
// - Fraction: numerator/denominator value type
// - add / multiply: the core total operations
// - FractionError: error types for the opt-in checked and parsing APIs
//
// Design principles:
// - Core operations never fail and never panic (wrapping on overflow)
// - Results are never reduced unless explicitly asked for
// - Zero and negative denominators are representable

mod errors;
mod fraction;

pub use errors::{FractionError, FractionResult};
pub use fraction::{add, multiply, Fraction};
