//! # Operator traits
//!
//! The `std::ops` operators and the `num` identities, wrapping the arithmetic methods on the type.
//! Every combination of owned and borrowed operands is provided.
//!
//! The methods are called through their full path, `Fraction::add(..)`, because the operator
//! traits in scope here take the same names.

/// Binary operator between two fractions, for all four owned and borrowed combinations.
macro_rules! fraction_operator {
    ($operator:ident, $method:ident, $inherent:ident) => {
        impl $operator<Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                Fraction::$inherent(&self, &rhs)
            }
        }

        impl $operator<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                Fraction::$inherent(&self, rhs)
            }
        }

        impl $operator<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                Fraction::$inherent(self, &rhs)
            }
        }

        impl $operator<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                Fraction::$inherent(self, rhs)
            }
        }
    }
}

/// Binary operator with an integer right hand side, for owned and borrowed fractions.
macro_rules! integer_operator {
    ($operator:ident, $method:ident, $inherent:ident, $integer:ty) => {
        impl $operator<$integer> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: $integer) -> Self::Output {
                Fraction::$inherent(&self, rhs)
            }
        }

        impl $operator<$integer> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: $integer) -> Self::Output {
                Fraction::$inherent(self, rhs)
            }
        }
    }
}

/// Compound assignment with a fraction, replacing the value by a new instance.
macro_rules! fraction_assign {
    ($operator:ident, $method:ident, $inherent:ident) => {
        impl $operator<Fraction> for Fraction {
            fn $method(&mut self, rhs: Fraction) {
                *self = Fraction::$inherent(self, &rhs);
            }
        }

        impl $operator<&Fraction> for Fraction {
            fn $method(&mut self, rhs: &Fraction) {
                *self = Fraction::$inherent(self, rhs);
            }
        }
    }
}

mod field {
    mod add {
        use std::iter::Sum;
        use std::ops::{Add, AddAssign};

        use itertools::Itertools;
        use num::BigInt;
        use num_traits::Zero;

        use crate::number_types::fraction::Fraction;

        fraction_operator!(Add, add, add);
        fraction_assign!(AddAssign, add_assign, add);
        integer_operator!(Add, add, add_integer, BigInt);
        integer_operator!(Add, add, add_integer, &BigInt);
        integer_operator!(Add, add, add_integer, i64);

        /// Pairwise, such that intermediate denominators stay balanced.
        impl Sum for Fraction {
            fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.tree_reduce(|left, right| Fraction::add(&left, &right))
                    .unwrap_or_else(Fraction::zero)
            }
        }

        impl<'a> Sum<&'a Fraction> for Fraction {
            fn sum<I: Iterator<Item=&'a Fraction>>(iter: I) -> Self {
                iter.cloned().sum()
            }
        }
    }

    mod sub {
        use std::ops::{Sub, SubAssign};

        use num::BigInt;

        use crate::number_types::fraction::Fraction;

        fraction_operator!(Sub, sub, subtract);
        fraction_assign!(SubAssign, sub_assign, subtract);
        integer_operator!(Sub, sub, subtract_integer, BigInt);
        integer_operator!(Sub, sub, subtract_integer, &BigInt);
        integer_operator!(Sub, sub, subtract_integer, i64);
    }

    mod mul {
        use std::iter::Product;
        use std::ops::{Mul, MulAssign};

        use itertools::Itertools;
        use num::BigInt;
        use num_traits::One;

        use crate::number_types::fraction::Fraction;

        fraction_operator!(Mul, mul, multiply);
        fraction_assign!(MulAssign, mul_assign, multiply);
        integer_operator!(Mul, mul, multiply_integer, BigInt);
        integer_operator!(Mul, mul, multiply_integer, &BigInt);
        integer_operator!(Mul, mul, multiply_integer, i64);

        impl Product for Fraction {
            fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.tree_reduce(|left, right| Fraction::multiply(&left, &right))
                    .unwrap_or_else(Fraction::one)
            }
        }

        impl<'a> Product<&'a Fraction> for Fraction {
            fn product<I: Iterator<Item=&'a Fraction>>(iter: I) -> Self {
                iter.cloned().product()
            }
        }
    }

    /// # Panics
    ///
    /// The operators panic when dividing by zero, like the integer operators do. Use
    /// `Fraction::divide` and `Fraction::divide_integer` to receive an error instead.
    mod div {
        use std::ops::{Div, DivAssign};

        use num::BigInt;

        use crate::error::InvalidArgument;
        use crate::number_types::traits::IntegerOperand;
        use crate::number_types::fraction::Fraction;

        fn or_panic(result: Result<Fraction, InvalidArgument>) -> Fraction {
            match result {
                Ok(quotient) => quotient,
                Err(error) => panic!("{}", error),
            }
        }

        impl Fraction {
            fn divide_or_panic(&self, divisor: &Fraction) -> Fraction {
                or_panic(self.divide(divisor))
            }

            fn divide_integer_or_panic(&self, divisor: impl IntegerOperand) -> Fraction {
                or_panic(self.divide_integer(divisor))
            }
        }

        fraction_operator!(Div, div, divide_or_panic);
        fraction_assign!(DivAssign, div_assign, divide_or_panic);
        integer_operator!(Div, div, divide_integer_or_panic, BigInt);
        integer_operator!(Div, div, divide_integer_or_panic, &BigInt);
        integer_operator!(Div, div, divide_integer_or_panic, i64);
    }

    mod neg {
        use std::ops::Neg;

        use crate::number_types::fraction::Fraction;

        impl Neg for Fraction {
            type Output = Fraction;

            fn neg(self) -> Self::Output {
                Fraction::from_reduced(-self.numerator, self.denominator)
            }
        }

        impl Neg for &Fraction {
            type Output = Fraction;

            fn neg(self) -> Self::Output {
                Fraction::from_reduced(-&self.numerator, self.denominator.clone())
            }
        }
    }

    mod identities {
        use num::BigInt;
        use num_traits::{One, Zero};

        use crate::number_types::fraction::Fraction;

        impl Zero for Fraction {
            fn zero() -> Self {
                Fraction::from_reduced(BigInt::zero(), BigInt::one())
            }

            fn is_zero(&self) -> bool {
                self.numerator.is_zero()
            }
        }

        impl One for Fraction {
            fn one() -> Self {
                Fraction::from_reduced(BigInt::one(), BigInt::one())
            }

            fn is_one(&self) -> bool {
                self.numerator.is_one() && self.denominator.is_one()
            }
        }
    }
}
