// ============================================================================
// Domain Models Module
// Configuration and operation value objects for the calculator engine
// ============================================================================

pub mod config;
pub mod operation;

pub use config::{ArithmeticConfig, OverflowPolicy, ZeroDenominatorPolicy};
pub use operation::Operation;
