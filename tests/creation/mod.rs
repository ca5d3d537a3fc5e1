//! # Construction and normalization
use num::BigInt;
use num_traits::One;

use exact_fraction::{Fraction, InvalidArgument, FR};

#[test]
fn creation() {
    assert_eq!(FR!(1, 1), Fraction::new(BigInt::one(), BigInt::one()).unwrap());
    assert_eq!(
        FR!(i64::MAX, i64::MAX),
        Fraction::new(BigInt::from(i64::MAX), BigInt::from(i64::MAX)).unwrap(),
    );
    assert_eq!(FR!(5, 15), FR!(1, 3));
    assert_eq!(FR!(1, 2), FR!(-1, -2));
    assert_eq!(FR!(-1, 2), FR!(1, -2));
}

#[test]
fn zero_denominator() {
    let error = Fraction::new(12, 0).unwrap_err();
    assert_eq!(error, InvalidArgument::zero_denominator());
    assert_eq!(error.to_string(), "InvalidArgument: denominator cannot be zero");

    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert!(boxed.source().is_none());
}

#[test]
fn mixed_integer_widths() {
    assert_eq!(Fraction::new(3_u8, -9_i128).unwrap(), FR!(-1, 3));
    assert_eq!(Fraction::new(&BigInt::from(10), 4_usize).unwrap(), FR!(5, 2));
    assert_eq!(Fraction::new(u128::MAX, u128::MAX).unwrap(), FR!(1));
}

#[test]
fn large_values_reduce() {
    let factor: BigInt = BigInt::from(3).pow(200);
    let x = Fraction::new(&factor * 7, &factor * -21).unwrap();
    assert_eq!(x, FR!(-1, 3));

    let numerator: BigInt = BigInt::from(2).pow(300) + 1;
    let x = Fraction::new(numerator.clone(), 1).unwrap();
    assert_eq!(x.numerator(), &numerator);
    assert!(x.is_integer());
}

#[test]
fn reconstruction() {
    for value in [FR!(0), FR!(-7, 9), FR!(12, 5), FR!(1, 1_000_000_007)] {
        let rebuilt = Fraction::new(value.numerator(), value.denominator()).unwrap();
        assert_eq!(rebuilt, value);
        assert_eq!(rebuilt.to_string(), value.to_string());
    }
}
