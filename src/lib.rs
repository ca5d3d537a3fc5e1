//! # Exact fractions
//!
//! Rational numbers backed by arbitrary precision integers. A `Fraction` is always stored in lowest
//! terms with a positive denominator, so that two fractions are equal exactly when their numerators
//! and denominators are equal.
//!
//! Values are immutable: every arithmetic operation returns a new, normalized instance.
#![warn(missing_docs)]

pub mod error;
pub mod number_types;

pub use error::InvalidArgument;
pub use number_types::fraction::Fraction;
pub use number_types::traits::IntegerOperand;
