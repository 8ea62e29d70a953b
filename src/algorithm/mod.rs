//! # Algorithms
//!
//! The optimization logic itself, as opposed to the problem and number representations it
//! operates on.
use thiserror::Error;

pub mod two_phase;

/// Ways in which an optimization attempt can fail.
///
/// Every failure mode of [`SimplexSolver::optimize`] is covered by a variant here; there are no
/// panics for well-formed inputs.
///
/// [`SimplexSolver::optimize`]: two_phase::SimplexSolver::optimize
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum OptimizationError {
    /// A constraint's dimension differs from the objective's.
    #[error("constraint has {found} coefficients, the objective has {expected}")]
    DimensionMismatch {
        /// Number of coefficients of the offending constraint.
        found: usize,
        /// Problem dimension as defined by the objective function.
        expected: usize,
    },
    /// No point satisfies all constraints.
    #[error("no feasible solution exists")]
    Infeasible,
    /// The objective can be improved without bound within the feasible region.
    #[error("the objective is unbounded on the feasible region")]
    Unbounded,
    /// The iteration budget was spent before an optimum was reached.
    #[error("no optimum found within {max} iterations")]
    IterationLimit {
        /// The budget that was exhausted.
        max: u64,
    },
}
