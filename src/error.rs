//! # Error reporting for invalid fraction operations
//!
//! There is only one kind of error: an argument that a fraction can't be built or evaluated with.
use core::fmt::Display;
use std::error::Error;
use std::fmt;

/// An `InvalidArgument` is created when an operation receives input it can't be computed for.
///
/// This happens when a zero denominator is reached, either directly at construction or through an
/// operand of an arithmetic operation, or when a decimal approximation is asked for with a negative
/// number of digits. The operation is aborted and nothing is constructed.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct InvalidArgument {
    description: String,
}

impl InvalidArgument {
    /// Create a new `InvalidArgument` with a description.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> InvalidArgument {
        InvalidArgument { description: description.into(), }
    }

    /// A denominator ended up being zero.
    pub fn zero_denominator() -> InvalidArgument {
        Self::new("denominator cannot be zero")
    }

    /// A decimal approximation was requested with fewer than zero fractional digits.
    pub fn negative_precision(precision: i32) -> InvalidArgument {
        Self::new(format!("precision must be non-negative, got {}", precision))
    }

    /// The description given at creation.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgument: {}", self.description)
    }
}

impl Error for InvalidArgument {}
