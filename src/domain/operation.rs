// ============================================================================
// Operation
// The binary operations a calculator evaluates
// ============================================================================

use crate::numeric::Fraction;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    /// Identity element used when folding a sequence
    pub const fn identity(self) -> Fraction {
        match self {
            Operation::Add => Fraction::ZERO,
            Operation::Multiply => Fraction::ONE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}
