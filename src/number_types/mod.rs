//! # Number types
//!
//! The fraction type, the helpers on arbitrary size integers it is computed with, and the traits
//! describing which integers can be combined with it.
pub mod traits;
pub mod integer;
pub mod fraction;
