//! # Traits
//!
//! Fractions are combined with integers of any width. Rather than writing out a method per integer
//! type, the operations are generic over the integers that can be widened to an arbitrary size
//! integer without loss.
use num::BigInt;

/// An integer that can be used as an operand of a fraction, or as one of its two parts.
///
/// Implemented for all primitive integer types and for `BigInt`, both by value and by reference.
pub trait IntegerOperand {
    /// Widen the value to an arbitrary size integer.
    fn into_big(self) -> BigInt;
}

macro_rules! widened_primitive {
    ($t: ident) => {
        impl IntegerOperand for $t {
            fn into_big(self) -> BigInt {
                BigInt::from(self)
            }
        }

        impl IntegerOperand for &$t {
            fn into_big(self) -> BigInt {
                BigInt::from(*self)
            }
        }
    }
}

widened_primitive!(i8);
widened_primitive!(u8);
widened_primitive!(i16);
widened_primitive!(u16);
widened_primitive!(i32);
widened_primitive!(u32);
widened_primitive!(i64);
widened_primitive!(u64);
widened_primitive!(i128);
widened_primitive!(u128);
widened_primitive!(isize);
widened_primitive!(usize);

impl IntegerOperand for BigInt {
    fn into_big(self) -> BigInt {
        self
    }
}

impl IntegerOperand for &BigInt {
    fn into_big(self) -> BigInt {
        self.clone()
    }
}
