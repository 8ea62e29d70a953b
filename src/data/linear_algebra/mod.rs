//! # Linear algebra
//!
//! Storage for the dense tableau matrix. The algorithm consumes this module only as a plain
//! two-dimensional buffer; all numeric interpretation happens at the algorithm layer.
pub mod matrix;
