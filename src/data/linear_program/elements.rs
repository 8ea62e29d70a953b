//! # Building blocks to describe linear programs.

/// The relational operator of a constraint.
///
/// A constraint compares a linear combination of the decision variables to a constant using one of
/// these operators.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RelationalOperator {
    Equal,
    Greater,
    Less,
}

impl RelationalOperator {
    /// The operator after both sides of the constraint are negated.
    ///
    /// Equality is invariant under negation.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
            Self::Less => Self::Greater,
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Minimize
    }
}
