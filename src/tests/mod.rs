//! # Integration tests that require a look inside the crate.
//!
//! Full problems solved through the public interface, grouped by the behavior they exercise:
//!
//! * `known_optima`: bounded feasible problems with hand-checked solutions
//! * `failures`: every way a solve can end in an error
//! * `exact_arithmetic`: the same algorithm running on non-float number types
pub mod exact_arithmetic;
pub mod known_optima;
