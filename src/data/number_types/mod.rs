//! # Number types
//!
//! The algorithm is generic over its arithmetic: all operations flow through the [`Policy`]
//! capability set defined in [`traits`]. This module provides ready-made policies for floating
//! point numbers, fixed and arbitrary precision integers and exact rationals.
//!
//! [`Policy`]: traits::Policy
pub mod float;
pub mod integer;
pub mod rational;
pub mod traits;
