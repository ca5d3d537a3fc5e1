//! # Integers
//!
//! Arbitrary precision integer helpers: the common factor used for reduction, least common
//! multiples and logarithms of integers too large for a float.
use std::f64::consts::LN_2;

use num::{BigInt, Integer};
use num_traits::{Signed, ToPrimitive, Zero};

/// Integers with more significant bits than this are shifted down before being converted to a
/// float. Anything between 60 and 1023 keeps both enough precision and the value in range.
const MAX_FLOAT_BITS: u64 = 1022;

/// The factor to divide both parts of a fraction by to bring it to lowest terms.
///
/// When the numerator is zero this is the denominator itself, such that zero always reduces to
/// `0/1`.
///
/// # Arguments
///
/// * `numerator`: Numerator of any sign.
/// * `denominator`: Positive denominator.
pub fn common_factor(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    debug_assert!(denominator.is_positive());

    let magnitude = numerator.abs();
    if &magnitude == denominator {
        magnitude
    } else {
        magnitude.gcd(denominator)
    }
}

/// Least common multiple of two positive denominators.
///
/// Uses `lcm_repeated_addition` when the `repeated-addition-lcm` feature is enabled, and
/// `lcm_euclidean` otherwise. The result is the same.
pub fn lcm(left: &BigInt, right: &BigInt) -> BigInt {
    if cfg!(feature = "repeated-addition-lcm") {
        lcm_repeated_addition(left, right)
    } else {
        lcm_euclidean(left, right)
    }
}

/// Least common multiple through the greatest common divisor, as `left / gcd * right`.
pub fn lcm_euclidean(left: &BigInt, right: &BigInt) -> BigInt {
    debug_assert!(left.is_positive() && right.is_positive());

    left / left.gcd(right) * right
}

/// Least common multiple by adding `left` to itself until the total is divisible by `right`.
///
/// Takes `right / gcd(left, right)` additions, which is very slow for large coprime values.
pub fn lcm_repeated_addition(left: &BigInt, right: &BigInt) -> BigInt {
    debug_assert!(left.is_positive() && right.is_positive());

    let mut total = left.clone();
    while !(&total % right).is_zero() {
        total += left;
    }
    total
}

/// Natural logarithm of an integer of any size.
///
/// Large values are shifted right until they fit in a float, and `ln(2)` is added back once for
/// every bit shifted away.
///
/// Follows the float semantics at the edges: `0` gives negative infinity and negative values give
/// NaN.
pub fn natural_log(value: &BigInt) -> f64 {
    let excess_bits = value.bits().saturating_sub(MAX_FLOAT_BITS);
    if excess_bits > 0 {
        let shifted = value >> excess_bits;
        float_log(&shifted) + excess_bits as f64 * LN_2
    } else {
        float_log(value)
    }
}

fn float_log(value: &BigInt) -> f64 {
    value.to_f64().map_or(f64::NAN, f64::ln)
}
