//! # Linear programs
//!
//! Data structures describing a linear program and its solution.
pub mod elements;
pub mod general_form;
pub mod solution;
