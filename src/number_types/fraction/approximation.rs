//! # Float approximations
//!
//! Conversions of an exact fraction to inexact floating point values.
use std::cmp::Ordering;

use num::{BigInt, Integer};
use num_traits::One;

use crate::error::InvalidArgument;
use crate::number_types::fraction::Fraction;
use crate::number_types::integer;

/// Every midpoint between two adjacent floats, and the float range boundary, is a multiple of
/// `2^-1075` and so has at most this many fractional decimal digits.
const FLOAT_MIDPOINT_DIGITS: u64 = 1075;

impl Fraction {
    /// Decimal value of the fraction, rounded half to even at a number of fractional digits.
    ///
    /// The rounding is done exactly on the integers. Only the rounded decimal is converted to the
    /// nearest float.
    ///
    /// Precision beyond `1075` digits plus the bit length of the denominator can't change the
    /// resulting float, so the rounding is done at most at that many digits. The cost is bounded
    /// by the size of the fraction, not by the precision.
    ///
    /// # Arguments
    ///
    /// * `precision`: Number of digits after the decimal point to round at.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the precision is negative.
    pub fn to_approximate_decimal(&self, precision: i32) -> Result<f64, InvalidArgument> {
        let digits = u32::try_from(precision)
            .map_err(|_| InvalidArgument::negative_precision(precision))?;
        let digits = u32::try_from(FLOAT_MIDPOINT_DIGITS + self.denominator.bits())
            .map_or(digits, |bound| digits.min(bound));

        let scaled = &self.numerator * BigInt::from(10).pow(digits);
        let rounded = round_half_even(&scaled, &self.denominator);

        Ok(decimal_to_float(&rounded, digits))
    }

    /// Natural logarithm, as `ln(numerator) - ln(denominator)`.
    ///
    /// Both parts may be far larger than the largest float.
    ///
    /// The value is not guarded: zero gives negative infinity and negative values give NaN.
    pub fn natural_log(&self) -> f64 {
        integer::natural_log(&self.numerator) - integer::natural_log(&self.denominator)
    }
}

/// Divide and round to the nearest integer, ties to the even neighbour.
///
/// # Arguments
///
/// * `numerator`: Any integer.
/// * `denominator`: Positive integer.
fn round_half_even(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_mod_floor(denominator);

    // The remainder is in `[0, denominator)`, so the distance to the floor is at most one.
    let round_up = match (&remainder + &remainder).cmp(denominator) {
        Ordering::Less => false,
        Ordering::Equal => quotient.is_odd(),
        Ordering::Greater => true,
    };

    if round_up {
        quotient + BigInt::one()
    } else {
        quotient
    }
}

/// The float nearest to `digits · 10^-scale`.
fn decimal_to_float(digits: &BigInt, scale: u32) -> f64 {
    // Always a well formed literal, and float parsing rounds correctly.
    format!("{}e-{}", digits, scale).parse().unwrap_or(f64::NAN)
}
