//! # Arithmetic on fractions and integers
use num::BigInt;

use exact_fraction::{Fraction, FR};
use exact_fraction::number_types::integer::{lcm_euclidean, lcm_repeated_addition};

#[test]
fn addition() {
    assert_eq!(FR!(1, 2).add(&FR!(2, 3)), FR!(7, 6));
    assert_eq!(FR!(541, 633).add(&FR!(769, 27)), FR!(167128, 5697));

    assert_eq!(FR!(1, 2).add_integer(1), FR!(3, 2));
}

#[test]
fn subtraction() {
    assert_eq!(FR!(1, 2).subtract(&FR!(2, 3)), FR!(-1, 6));
    assert_eq!(FR!(286, 754).subtract(&FR!(945, 112)), FR!(-3739, 464));

    assert_eq!(FR!(1, 2).subtract_integer(1), FR!(-1, 2));
}

#[test]
fn multiplication() {
    assert_eq!(FR!(583, 232).multiply(&FR!(641, 248)), FR!(373703, 57536));
    assert_eq!(FR!(5, 48).multiply(&FR!(-80, 51)), FR!(-25, 153));

    assert_eq!(FR!(3, 5).multiply_integer(7), FR!(21, 5));
}

#[test]
fn division() {
    assert_eq!(FR!(42, 62).divide(&FR!(16, 3)).unwrap(), FR!(63, 496));
    assert_eq!(FR!(633, 85).divide(&FR!(318, 844)).unwrap(), FR!(89042, 4505));

    assert_eq!(FR!(17, 37).divide_integer(5).unwrap(), FR!(17, 185));
    assert!(FR!(17, 37).divide_integer(0).is_err());
    assert!(FR!(17, 37).divide(&FR!(0)).is_err());
}

#[test]
fn power() {
    assert_eq!(FR!(2, 3).pow(2), FR!(4, 9));
    assert_eq!(FR!(2, 7).pow(3), FR!(8, 343));
}

#[test]
fn operators_agree_with_methods() {
    let values = [FR!(0), FR!(1, 2), FR!(-5, 3), FR!(7, 12), FR!(-11, 8)];
    for x in &values {
        for y in &values {
            assert_eq!(x + y, x.add(y));
            assert_eq!(x - y, x.subtract(y));
            assert_eq!(x * y, x.multiply(y));
            if let Ok(quotient) = x.divide(y) {
                assert_eq!(x / y, quotient);
            }
        }
        assert_eq!(x + 3_i64, x.add_integer(3));
        assert_eq!(x - BigInt::from(3), x.subtract_integer(3));
        assert_eq!(x * &BigInt::from(-2), x.multiply_integer(-2));
        assert_eq!(x / 4_i64, x.divide_integer(4).unwrap());
    }
}

#[test]
fn results_stay_normalized() {
    let mut x = FR!(1, 3);
    for i in 1..50 {
        x = &x + &FR!(i, i + 2);
        x = x * FR!(i + 1, i);
        assert!(x.denominator() > &BigInt::from(0));
        assert_eq!(Fraction::new(x.numerator(), x.denominator()).unwrap(), x);
    }
}

#[test]
fn lcm_strategies_agree() {
    for left in 1..60 {
        for right in 1..60 {
            let (left, right) = (BigInt::from(left), BigInt::from(right));
            assert_eq!(lcm_euclidean(&left, &right), lcm_repeated_addition(&left, &right));
        }
    }
}
