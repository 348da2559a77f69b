// ============================================================================
// Engine Module
// Contains the policy-aware fraction calculator
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::FractionCalculator;
pub use factory::{create_from_config, FractionCalculatorBuilder};
