// ============================================================================
// Fraction
// Numerator/denominator pair with unreduced arithmetic
// ============================================================================

use super::errors::{FractionError, FractionResult};
use rust_decimal::Decimal;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rational value stored as a raw `numerator/denominator` pair.
///
/// No invariant is enforced: the denominator may be zero or negative, and
/// results are never reduced to lowest terms. Equality is structural, so
/// `6/6` and `1/1` compare unequal; use [`Fraction::equivalent`] to compare
/// values.
///
/// # Example
/// ```
/// use fraction_arith::numeric::{add, multiply, Fraction};
///
/// let a = Fraction::new(2, 3);
/// let b = Fraction::new(4, 5);
/// assert_eq!(add(a, b), Fraction::new(22, 15));
/// assert_eq!(multiply(a, Fraction::new(3, 2)), Fraction::new(6, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

// ============================================================================
// Core Operations
// ============================================================================

/// Adds two fractions without reducing the result.
///
/// Operands sharing a denominator keep it: `2/3 + -2/3 = 0/3`. Otherwise the
/// result is `(a.n * b.d + b.n * a.d) / (a.d * b.d)`. Components wrap on
/// overflow; this function never panics and never rejects input.
#[inline]
pub const fn add(a: Fraction, b: Fraction) -> Fraction {
    if a.denominator == b.denominator {
        return Fraction::new(a.numerator.wrapping_add(b.numerator), a.denominator);
    }

    Fraction::new(
        a.numerator
            .wrapping_mul(b.denominator)
            .wrapping_add(b.numerator.wrapping_mul(a.denominator)),
        a.denominator.wrapping_mul(b.denominator),
    )
}

/// Multiplies two fractions component-wise without reducing the result.
#[inline]
pub const fn multiply(a: Fraction, b: Fraction) -> Fraction {
    Fraction::new(
        a.numerator.wrapping_mul(b.numerator),
        a.denominator.wrapping_mul(b.denominator),
    )
}

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Self = Self::new(0, 1);

    /// One (1/1)
    pub const ONE: Self = Self::new(1, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create `value/1`.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self::new(value, 1)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// True when the denominator is zero.
    #[inline]
    pub const fn is_degenerate(self) -> bool {
        self.denominator == 0
    }

    /// Value equivalence by cross-multiplication.
    ///
    /// A degenerate fraction is only equivalent to an identical pair.
    pub fn equivalent(&self, other: &Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return self == other;
        }

        (self.numerator as i128) * (other.denominator as i128)
            == (other.numerator as i128) * (self.denominator as i128)
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Same result as [`add`], but reports overflow instead of wrapping.
    ///
    /// # Errors
    /// Returns `Overflow` if any intermediate component leaves the i64 range.
    pub fn checked_add(self, rhs: Self) -> FractionResult<Self> {
        if self.denominator == rhs.denominator {
            return self
                .numerator
                .checked_add(rhs.numerator)
                .map(|numerator| Self::new(numerator, self.denominator))
                .ok_or(FractionError::Overflow);
        }

        let left = self.numerator.checked_mul(rhs.denominator);
        let right = rhs.numerator.checked_mul(self.denominator);
        let numerator = left
            .zip(right)
            .and_then(|(l, r)| l.checked_add(r))
            .ok_or(FractionError::Overflow)?;
        let denominator = self
            .denominator
            .checked_mul(rhs.denominator)
            .ok_or(FractionError::Overflow)?;

        Ok(Self::new(numerator, denominator))
    }

    /// Same result as [`multiply`], but reports overflow instead of wrapping.
    ///
    /// # Errors
    /// Returns `Overflow` if either component leaves the i64 range.
    pub fn checked_mul(self, rhs: Self) -> FractionResult<Self> {
        let numerator = self
            .numerator
            .checked_mul(rhs.numerator)
            .ok_or(FractionError::Overflow)?;
        let denominator = self
            .denominator
            .checked_mul(rhs.denominator)
            .ok_or(FractionError::Overflow)?;

        Ok(Self::new(numerator, denominator))
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// Never applied implicitly. Degenerate fractions are returned unchanged
    /// and any zero numerator becomes `0/1`. A pair whose normalized form
    /// does not fit in i64 (e.g. `i64::MIN/-1`) is also returned unchanged.
    pub fn reduced(self) -> Self {
        self.checked_reduced().unwrap_or(self)
    }

    /// Same as [`Fraction::reduced`], but reports an unrepresentable
    /// normalized form.
    ///
    /// # Errors
    /// Returns `Overflow` if flipping the sign or dividing leaves a component
    /// outside the i64 range.
    pub fn checked_reduced(self) -> FractionResult<Self> {
        if self.is_degenerate() {
            return Ok(self);
        }
        if self.numerator == 0 {
            return Ok(Self::ZERO);
        }

        let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs()) as i128;
        let mut numerator = self.numerator as i128 / divisor;
        let mut denominator = self.denominator as i128 / divisor;

        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let numerator = i64::try_from(numerator).map_err(|_| FractionError::Overflow)?;
        let denominator = i64::try_from(denominator).map_err(|_| FractionError::Overflow)?;

        Ok(Self::new(numerator, denominator))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Evaluate the quotient as a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `DivisionByZero` for a degenerate fraction
    /// - `Overflow` if the quotient is not representable
    pub fn to_decimal(self) -> FractionResult<Decimal> {
        if self.is_degenerate() {
            return Err(FractionError::DivisionByZero);
        }

        Decimal::from(self.numerator)
            .checked_div(Decimal::from(self.denominator))
            .ok_or(FractionError::Overflow)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<(i64, i64)> for Fraction {
    #[inline]
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl Add for Fraction {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl Mul for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        multiply(self, rhs)
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.numerator.wrapping_neg(), self.denominator)
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, add)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, multiply)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().product()
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parse `"n/d"` or a bare integer `"n"`.
    ///
    /// # Examples
    /// - "2/3" -> 2/3
    /// - " -4 / 0 " -> -4/0
    /// - "7" -> 7/1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FractionError::InvalidInput);
        }

        let parse = |part: &str| -> FractionResult<i64> {
            part.trim().parse().map_err(|_| FractionError::InvalidInput)
        };

        match s.split_once('/') {
            Some((num, den)) => Ok(Self::new(parse(num)?, parse(den)?)),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
