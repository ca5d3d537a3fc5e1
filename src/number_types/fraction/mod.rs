//! # An arbitrary precision fraction
//!
//! A numerator and denominator pair in lowest terms. The sign of the value is carried by the
//! numerator alone; the denominator is always positive.
use std::cmp::Ordering;
use std::fmt;

use num::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::InvalidArgument;
use crate::number_types::integer::common_factor;
use crate::number_types::traits::IntegerOperand;

mod arithmetic;
mod approximation;
mod wrapping;
mod macros;

/// An exact rational number.
///
/// Instances are normalized at construction and never change afterwards:
///
/// * the denominator is positive,
/// * the numerator and denominator have no common factor other than one,
/// * zero is `0/1`.
///
/// Equality of the two parts is therefore equality of the values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a new fraction in lowest terms.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any nonzero integer. A negative sign moves to the numerator.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator is zero.
    pub fn new(
        numerator: impl IntegerOperand,
        denominator: impl IntegerOperand,
    ) -> Result<Self, InvalidArgument> {
        Self::normalize(numerator.into_big(), denominator.into_big())
    }

    /// Bring a raw numerator and denominator pair to its canonical form.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator is zero.
    fn normalize(numerator: BigInt, denominator: BigInt) -> Result<Self, InvalidArgument> {
        if denominator.is_zero() {
            Err(InvalidArgument::zero_denominator())
        } else {
            Ok(Self::reduce(numerator, denominator))
        }
    }

    /// Move the sign to the numerator and divide out the common factor.
    ///
    /// All operations compute an unreduced pair and end here. The denominator can't be zero.
    fn reduce(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let sign = numerator.sign() * denominator.sign();
        let (_, magnitude) = numerator.into_parts();
        let numerator = BigInt::from_biguint(sign, magnitude);
        let denominator = denominator.abs();

        let common = common_factor(&numerator, &denominator);

        Self { numerator: numerator / &common, denominator: denominator / common }
    }

    /// Construct from a pair that is already known to be in lowest terms with a positive
    /// denominator.
    fn from_reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());
        debug_assert!(common_factor(&numerator, &denominator).is_one());

        Self { numerator, denominator }
    }

    /// The numerator, which carries the sign of the value.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator, always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Whether the value is smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Sign of the value: `-1`, `0` or `1` as a fraction.
    pub fn signum(&self) -> Self {
        Self::from_reduced(self.numerator.signum(), BigInt::one())
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::from_reduced(self.numerator.abs(), self.denominator.clone())
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the value is zero.
    pub fn recip(&self) -> Result<Self, InvalidArgument> {
        Self::normalize(self.denominator.clone(), self.numerator.clone())
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_reduced(value, BigInt::one())
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<Fraction> for (BigInt, BigInt) {
    fn from(value: Fraction) -> Self {
        (value.numerator, value.denominator)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        // Denominators are positive, so cross multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}
