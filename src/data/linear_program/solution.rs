//! # Representation of solutions
//!
//! Once a linear program is solved, the optimum is handed to the caller as an immutable point and
//! the objective value at that point.
use std::fmt::Debug;

/// A point and the value of an objective function at that point.
///
/// The point has the original problem dimension; slack, artificial and sign-extension variables
/// never appear in it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointValuePair<N> {
    point: Vec<N>,
    value: N,
}

impl<N: Clone + Debug> PointValuePair<N> {
    /// Build a point/objective function value pair.
    ///
    /// # Arguments
    ///
    /// * `point`: Point coordinates. A copy of the slice is stored.
    /// * `value`: Value of the objective function at the point.
    pub fn new(point: &[N], value: N) -> Self {
        Self {
            point: point.to_vec(),
            value,
        }
    }

    /// Coordinates of the point.
    pub fn point(&self) -> &[N] {
        &self.point
    }

    /// Value of the objective function at the point.
    pub fn value(&self) -> &N {
        &self.value
    }

    /// Decompose into the owned coordinates and value.
    pub fn into_inner(self) -> (Vec<N>, N) {
        (self.point, self.value)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::PointValuePair;

    #[test]
    fn construction_copies_the_point() {
        let mut coordinates = vec![1, 2, 3];
        let solution = PointValuePair::new(&coordinates, 6);
        coordinates[0] = -1;

        assert_eq!(solution.point(), &[1, 2, 3]);
        assert_eq!(solution.value(), &6);
    }
}
