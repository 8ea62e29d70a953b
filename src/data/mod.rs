//! # Data structures
//!
//! Problem descriptions, matrix storage and the number types the algorithm is generic over.
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
