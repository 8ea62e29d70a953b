//! # Strategies
//!
//! Interchangeable decision rules of the Simplex method.
pub mod pivot_rule;
