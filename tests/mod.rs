//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! Run these with and without the `repeated-addition-lcm` feature; the results should not differ.

mod creation;
mod arithmetic;
