//! # A linear program solver
//!
//! Linear programs are solved using the two-phase Simplex Method over a dense tableau. The
//! arithmetic is pluggable: the algorithm is written entirely against the
//! [`Policy`](data::number_types::traits::Policy) capability set, so the same code runs on
//! floating point numbers, integers and exact rationals.
//!
//! ```
//! use tablp::algorithm::two_phase::SimplexSolver;
//! use tablp::data::linear_program::elements::{Objective, RelationalOperator};
//! use tablp::data::linear_program::general_form::{
//!     LinearConstraint, LinearConstraintSet, LinearObjectiveFunction,
//! };
//!
//! // maximize 3x + 5y subject to x + y <= 4 and x <= 2
//! let objective = LinearObjectiveFunction::new(vec![3., 5.], 0.);
//! let constraints = LinearConstraintSet::new(vec![
//!     LinearConstraint::new(vec![1., 1.], RelationalOperator::Less, 4.),
//!     LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 2.),
//! ]);
//!
//! let mut solver = SimplexSolver::default();
//! let solution = solver
//!     .optimize(&objective, &constraints, Objective::Maximize, true)
//!     .unwrap();
//!
//! assert_eq!(solution.point(), &[0., 4.]);
//! assert_eq!(solution.value(), &20.);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
