//! # Arithmetic
//!
//! Each operation computes a raw numerator and denominator and normalizes the result into a new
//! instance. The operands are never modified.
//!
//! Operations with a fraction operand and with an integer operand are separate methods; the integer
//! variants accept any `IntegerOperand`. Only division can reach a zero denominator, all other
//! denominators are products of positive denominators.
use num::BigInt;

use crate::error::InvalidArgument;
use crate::number_types::fraction::Fraction;
use crate::number_types::integer::lcm;
use crate::number_types::traits::IntegerOperand;

impl Fraction {
    /// Bring both numerators on the least common multiple of the two denominators.
    ///
    /// # Return value
    ///
    /// The two scaled numerators and the common denominator.
    fn on_common_denominator(&self, other: &Fraction) -> (BigInt, BigInt, BigInt) {
        let common = lcm(&self.denominator, &other.denominator);
        let left = &self.numerator * (&common / &self.denominator);
        let right = &other.numerator * (&common / &other.denominator);

        (left, right, common)
    }

    /// Sum of two fractions, computed on the least common multiple of the denominators.
    pub fn add(&self, addend: &Fraction) -> Fraction {
        let (left, right, common) = self.on_common_denominator(addend);
        Self::reduce(left + right, common)
    }

    /// Sum with an integer, `(a + k·b) / b`.
    pub fn add_integer(&self, addend: impl IntegerOperand) -> Fraction {
        let scaled = addend.into_big() * &self.denominator;
        Self::reduce(&self.numerator + scaled, self.denominator.clone())
    }

    /// Difference of two fractions, computed on the least common multiple of the denominators.
    pub fn subtract(&self, subtrahend: &Fraction) -> Fraction {
        let (left, right, common) = self.on_common_denominator(subtrahend);
        Self::reduce(left - right, common)
    }

    /// Difference with an integer, `(a − k·b) / b`.
    pub fn subtract_integer(&self, subtrahend: impl IntegerOperand) -> Fraction {
        let scaled = subtrahend.into_big() * &self.denominator;
        Self::reduce(&self.numerator - scaled, self.denominator.clone())
    }

    /// Product of two fractions.
    pub fn multiply(&self, multiplicand: &Fraction) -> Fraction {
        Self::reduce(
            &self.numerator * &multiplicand.numerator,
            &self.denominator * &multiplicand.denominator,
        )
    }

    /// Product with an integer.
    pub fn multiply_integer(&self, multiplicand: impl IntegerOperand) -> Fraction {
        Self::reduce(&self.numerator * multiplicand.into_big(), self.denominator.clone())
    }

    /// Quotient of two fractions, `(a·d) / (b·c)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the divisor is zero.
    pub fn divide(&self, divisor: &Fraction) -> Result<Fraction, InvalidArgument> {
        Self::normalize(
            &self.numerator * &divisor.denominator,
            &self.denominator * &divisor.numerator,
        )
    }

    /// Quotient with an integer, `a / (b·k)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the divisor is zero.
    pub fn divide_integer(&self, divisor: impl IntegerOperand) -> Result<Fraction, InvalidArgument> {
        Self::normalize(self.numerator.clone(), &self.denominator * divisor.into_big())
    }

    /// Raise both parts to a power.
    ///
    /// Any value to the power zero is one, including zero itself.
    pub fn pow(&self, exponent: u32) -> Fraction {
        Self::reduce(self.numerator.pow(exponent), self.denominator.pow(exponent))
    }
}
