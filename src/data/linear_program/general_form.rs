//! # The problem model
//!
//! A linear program in its general form: a linear objective, optimized over an arbitrary mix of
//! equality and inequality constraints. No canonicalization happens here beyond reducing
//! two-sided constraints to a single side; bringing constraints to the non-negative right hand
//! side form the tableau needs is done through [`LinearConstraint::normalize`].
use std::fmt::Debug;
use std::slice::Iter;

use crate::data::linear_program::elements::RelationalOperator;
use crate::data::number_types::traits::Policy;

/// An objective function of the form `c_1 x_1 + ... + c_n x_n + d`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearObjectiveFunction<N> {
    /// Coefficients `c_i`, defining the problem dimension `n`.
    coefficients: Vec<N>,
    /// Constant term `d`.
    constant: N,
}

impl<N: Clone + Debug> LinearObjectiveFunction<N> {
    /// Build an objective function from its coefficients and constant term.
    pub fn new(coefficients: Vec<N>, constant: N) -> Self {
        Self {
            coefficients,
            constant,
        }
    }

    /// Coefficients of the linear equation being optimized.
    pub fn coefficients(&self) -> &[N] {
        &self.coefficients
    }

    /// Constant term of the linear equation being optimized.
    pub fn constant(&self) -> &N {
        &self.constant
    }

    /// The value of the objective function at a point.
    ///
    /// # Arguments
    ///
    /// * `point`: Coordinates of length equal to this objective's dimension.
    pub fn value<P: Policy<Num = N>>(&self, point: &[N]) -> N {
        debug_assert_eq!(point.len(), self.coefficients.len());

        let inner_product = self
            .coefficients
            .iter()
            .zip(point)
            .fold(P::zero(), |total, (coefficient, coordinate)| {
                P::add(&total, &P::mul(coefficient, coordinate))
            });
        P::add(&inner_product, &self.constant)
    }
}

/// A single constraint `c_1 x_1 + ... + c_n x_n <op> v`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearConstraint<N> {
    /// Coefficients of the left hand side.
    coefficients: Vec<N>,
    /// How the left hand side relates to the right hand side.
    operator: RelationalOperator,
    /// Right hand side value.
    value: N,
}

impl<N: Clone + Debug> LinearConstraint<N> {
    /// Build a constraint involving a single linear expression.
    pub fn new(coefficients: Vec<N>, operator: RelationalOperator, value: N) -> Self {
        Self {
            coefficients,
            operator,
            value,
        }
    }

    /// Build a constraint involving two linear expressions, `lhs <op> rhs`.
    ///
    /// The constraint is reduced to a single side by subtracting the right hand side coefficients
    /// from the left hand side ones, and the left hand side constant from the right hand side one.
    ///
    /// # Arguments
    ///
    /// * `lhs_coefficients`, `rhs_coefficients`: Expression coefficients of equal length.
    /// * `lhs_constant`, `rhs_constant`: Constant terms of the two expressions.
    pub fn between<P: Policy<Num = N>>(
        lhs_coefficients: &[N],
        lhs_constant: &N,
        operator: RelationalOperator,
        rhs_coefficients: &[N],
        rhs_constant: &N,
    ) -> Self {
        debug_assert_eq!(lhs_coefficients.len(), rhs_coefficients.len());

        Self {
            coefficients: lhs_coefficients
                .iter()
                .zip(rhs_coefficients)
                .map(|(lhs, rhs)| P::sub(lhs, rhs))
                .collect(),
            operator,
            value: P::sub(rhs_constant, lhs_constant),
        }
    }

    /// An equivalent constraint with a non-negative right hand side.
    ///
    /// If the right hand side is negative, both sides are negated and the operator flipped. The
    /// tableau requires this form because the signs of its slack and artificial variables assume
    /// non-negative right hand sides. Normalizing an already normalized constraint is a no-op.
    #[must_use]
    pub fn normalize<P: Policy<Num = N>>(&self) -> Self {
        if P::is_below_zero(&self.value) {
            Self {
                coefficients: self.coefficients.iter().map(|c| P::negate(c)).collect(),
                operator: self.operator.flipped(),
                value: P::negate(&self.value),
            }
        } else {
            self.clone()
        }
    }

    /// Coefficients of the constraint's left hand side.
    pub fn coefficients(&self) -> &[N] {
        &self.coefficients
    }

    /// The relation between the left and right hand sides.
    pub fn operator(&self) -> RelationalOperator {
        self.operator
    }

    /// Right hand side value of the constraint.
    pub fn value(&self) -> &N {
        &self.value
    }
}

/// An ordered collection of constraints, together describing the feasible region.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearConstraintSet<N> {
    constraints: Vec<LinearConstraint<N>>,
}

impl<N: Clone + Debug> LinearConstraintSet<N> {
    /// Collect constraints into a set.
    pub fn new(constraints: Vec<LinearConstraint<N>>) -> Self {
        Self { constraints }
    }

    /// Iterate over the constraints in insertion order.
    pub fn iter(&self) -> Iter<'_, LinearConstraint<N>> {
        self.constraints.iter()
    }

    /// Number of constraints in the set.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the set contains no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<N: Clone + Debug> From<Vec<LinearConstraint<N>>> for LinearConstraintSet<N> {
    fn from(constraints: Vec<LinearConstraint<N>>) -> Self {
        Self::new(constraints)
    }
}
