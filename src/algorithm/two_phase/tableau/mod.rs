//! # The Simplex tableau
//!
//! Dense matrix encoding of the current Simplex state, together with the basic variable
//! bookkeeping and all row-level algebra: construction from a problem, pivot application,
//! the optimality test and solution extraction.
//!
//! Column layout of a freshly built tableau for `maximize 15x + 10y` subject to
//! `x <= 2`, `y <= 3`, `x + y = 4`:
//!
//! ```text
//!  W |  Z | x0 | x1 | s0 | s1 | a0 | RHS
//! -------------------------------------
//! -1    0   -1   -1    0    0    0   -4   <- phase 1 objective
//!  0    1  -15  -10    0    0    0    0   <- phase 2 objective
//!  0    0    1    0    1    0    0    2   <- constraint 1
//!  0    0    0    1    0    1    0    3   <- constraint 2
//!  0    0    1    1    0    0    1    4   <- constraint 3
//! ```
//!
//! `W` is the phase 1 objective (present only when artificial variables exist), `Z` the phase 2
//! objective, `s_i` slack/surplus variables, `a_i` artificial variables and `RHS` the right hand
//! side. Unrestricted-sign problems get one extra decision column `x-` so that every original
//! variable can be read as `x_i - x-`.
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use crate::algorithm::OptimizationError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{Objective, RelationalOperator};
use crate::data::linear_program::general_form::{
    LinearConstraint, LinearConstraintSet, LinearObjectiveFunction,
};
use crate::data::linear_program::solution::PointValuePair;
use crate::data::number_types::traits::{approx_cmp, Policy};

/// Label of the extra decision column for unrestricted-sign problems.
const NEGATIVE_VAR_COLUMN_LABEL: &str = "x-";

/// A tableau for use in the two-phase Simplex method.
///
/// Owns the dense matrix and the basic variable maps; both are mutated in place by every pivot.
/// An instance is built once per solve and discarded after the solution is extracted.
pub struct SimplexTableau<P: Policy> {
    /// The objective as handed in by the caller, used to evaluate the extracted point.
    objective: LinearObjectiveFunction<P::Num>,
    /// Whether the decision variables may only take non-negative values.
    restrict_to_non_negative: bool,
    /// Tolerance used by the optimality test and the phase 1 column drop.
    epsilon: P::Num,
    /// Dense matrix of shape `height x width` as documented on the module.
    matrix: DenseMatrix<P::Num>,
    /// One label per column; used to locate surviving columns after `drop_phase_1_objective`.
    column_labels: Vec<String>,
    /// Decision variables, including the sign extension column when present.
    nr_decision_variables: usize,
    /// One slack or surplus variable per inequality constraint.
    nr_slack_variables: usize,
    /// One artificial variable per `=` or `>=` constraint. Zero after phase 1 is dropped.
    nr_artificial_variables: usize,
    /// Per column: the row this column is basic in, if any.
    basic_variable_of_column: Vec<Option<usize>>,
    /// Per row: the column that is basic in this row, if any.
    basic_variable_of_row: Vec<Option<usize>>,
}

impl<P: Policy> SimplexTableau<P> {
    /// Build a tableau for a linear problem.
    ///
    /// Constraints are normalized to non-negative right hand sides first; the matrix is then
    /// assembled as documented on the module and the initial basis read off the slack and
    /// artificial identity columns.
    ///
    /// # Arguments
    ///
    /// * `objective`: Linear objective function, defining the problem dimension.
    /// * `constraints`: Linear constraints, not necessarily normalized.
    /// * `goal`: Whether to maximize or minimize the objective.
    /// * `restrict_to_non_negative`: Whether variables may only take non-negative values.
    /// * `epsilon`: Error to accept when checking for optimality.
    ///
    /// # Errors
    ///
    /// When a constraint's coefficient count differs from the objective's dimension.
    pub fn new(
        objective: &LinearObjectiveFunction<P::Num>,
        constraints: &LinearConstraintSet<P::Num>,
        goal: Objective,
        restrict_to_non_negative: bool,
        epsilon: P::Num,
    ) -> Result<Self, OptimizationError> {
        let dimension = objective.coefficients().len();
        for constraint in constraints.iter() {
            if constraint.coefficients().len() != dimension {
                return Err(OptimizationError::DimensionMismatch {
                    found: constraint.coefficients().len(),
                    expected: dimension,
                });
            }
        }

        let constraints: Vec<_> = constraints.iter().map(|c| c.normalize::<P>()).collect();
        let count = |operator: RelationalOperator| {
            constraints.iter().filter(|c| c.operator() == operator).count()
        };
        let nr_slack_variables =
            count(RelationalOperator::Less) + count(RelationalOperator::Greater);
        let nr_artificial_variables =
            count(RelationalOperator::Equal) + count(RelationalOperator::Greater);
        let nr_decision_variables = dimension + usize::from(!restrict_to_non_negative);

        let matrix = Self::create_matrix(
            objective,
            &constraints,
            goal == Objective::Maximize,
            restrict_to_non_negative,
            nr_decision_variables,
            nr_slack_variables,
            nr_artificial_variables,
        );

        let mut tableau = Self {
            objective: objective.clone(),
            restrict_to_non_negative,
            epsilon,
            matrix,
            column_labels: Vec::new(),
            nr_decision_variables,
            nr_slack_variables,
            nr_artificial_variables,
            basic_variable_of_column: Vec::new(),
            basic_variable_of_row: Vec::new(),
        };
        // Only slack or artificial columns can be basic initially.
        tableau.initialize_basic_variables(tableau.slack_variable_offset());
        tableau.initialize_column_labels();
        Ok(tableau)
    }

    /// Assemble the dense matrix for the normalized constraints.
    #[allow(clippy::too_many_arguments)]
    fn create_matrix(
        objective: &LinearObjectiveFunction<P::Num>,
        constraints: &[LinearConstraint<P::Num>],
        maximize: bool,
        restrict_to_non_negative: bool,
        nr_decision_variables: usize,
        nr_slack_variables: usize,
        nr_artificial_variables: usize,
    ) -> DenseMatrix<P::Num> {
        let nr_objective_functions = if nr_artificial_variables > 0 { 2 } else { 1 };
        let width = nr_decision_variables
            + nr_slack_variables
            + nr_artificial_variables
            + nr_objective_functions
            + 1; // RHS
        let height = constraints.len() + nr_objective_functions;
        let slack_variable_offset = nr_objective_functions + nr_decision_variables;
        let artificial_variable_offset = slack_variable_offset + nr_slack_variables;

        let mut matrix = DenseMatrix::filled_with(P::zero(), height, width);
        let minus_one = P::negate(&P::one());

        if nr_objective_functions == 2 {
            matrix.set(0, 0, minus_one.clone());
        }

        let z_row = nr_objective_functions - 1;
        matrix.set(
            z_row,
            z_row,
            if maximize { P::one() } else { minus_one.clone() },
        );

        // The engine minimizes internally; maximization negates the objective row so the
        // "all reduced costs non-negative" optimality test applies to both goals.
        let objective_coefficients: Vec<P::Num> = if maximize {
            objective.coefficients().iter().map(|c| P::negate(c)).collect()
        } else {
            objective.coefficients().to_vec()
        };
        for (j, coefficient) in objective_coefficients.iter().enumerate() {
            matrix.set(z_row, nr_objective_functions + j, coefficient.clone());
        }
        matrix.set(
            z_row,
            width - 1,
            if maximize {
                objective.constant().clone()
            } else {
                P::negate(objective.constant())
            },
        );
        if !restrict_to_non_negative {
            matrix.set(
                z_row,
                slack_variable_offset - 1,
                inverted_coefficient_sum::<P>(&objective_coefficients),
            );
        }

        let mut slack_variable = 0;
        let mut artificial_variable = 0;
        for (i, constraint) in constraints.iter().enumerate() {
            let row = nr_objective_functions + i;

            for (j, coefficient) in constraint.coefficients().iter().enumerate() {
                matrix.set(row, nr_objective_functions + j, coefficient.clone());
            }
            if !restrict_to_non_negative {
                matrix.set(
                    row,
                    slack_variable_offset - 1,
                    inverted_coefficient_sum::<P>(constraint.coefficients()),
                );
            }
            matrix.set(row, width - 1, constraint.value().clone());

            match constraint.operator() {
                RelationalOperator::Less => {
                    matrix.set(row, slack_variable_offset + slack_variable, P::one());
                    slack_variable += 1;
                }
                RelationalOperator::Greater => {
                    // surplus
                    matrix.set(row, slack_variable_offset + slack_variable, minus_one.clone());
                    slack_variable += 1;
                }
                RelationalOperator::Equal => {}
            }

            if matches!(
                constraint.operator(),
                RelationalOperator::Equal | RelationalOperator::Greater,
            ) {
                let column = artificial_variable_offset + artificial_variable;
                matrix.set(0, column, P::one());
                matrix.set(row, column, P::one());
                artificial_variable += 1;

                // Keep W consistent: its reduced costs must reflect the negative sum of all
                // rows that received an artificial variable.
                let constraint_row = matrix.row(row).to_vec();
                for (cell, value) in matrix.row_mut(0).iter_mut().zip(&constraint_row) {
                    *cell = P::sub(cell, value);
                }
            }
        }

        matrix
    }

    /// Initialize the labels for the columns.
    fn initialize_column_labels(&mut self) {
        if self.nr_objective_functions() == 2 {
            self.column_labels.push("W".to_string());
        }
        self.column_labels.push("Z".to_string());
        for i in 0..self.nr_original_decision_variables() {
            self.column_labels.push(format!("x{i}"));
        }
        if !self.restrict_to_non_negative {
            self.column_labels.push(NEGATIVE_VAR_COLUMN_LABEL.to_string());
        }
        for i in 0..self.nr_slack_variables {
            self.column_labels.push(format!("s{i}"));
        }
        for i in 0..self.nr_artificial_variables {
            self.column_labels.push(format!("a{i}"));
        }
        self.column_labels.push("RHS".to_string());
    }

    /// Rebuild the basic variable maps by scanning for identity columns.
    ///
    /// # Arguments
    ///
    /// * `start_column`: First column that can be basic; earlier columns are skipped.
    fn initialize_basic_variables(&mut self, start_column: usize) {
        let nr_columns = self.width() - 1;
        self.basic_variable_of_column = vec![None; nr_columns];
        self.basic_variable_of_row = vec![None; self.height()];

        for column in start_column..nr_columns {
            if let Some(row) = self.find_basic_row(column) {
                self.basic_variable_of_column[column] = Some(row);
                self.basic_variable_of_row[row] = Some(column);
            }
        }
    }

    /// The row in which the given column is basic: the column holds a single one and zeros
    /// elsewhere. `None` if the column is not basic.
    fn find_basic_row(&self, column: usize) -> Option<usize> {
        let mut basic_row = None;
        for row in 0..self.height() {
            let entry = self.get_entry(row, column);
            if P::is_one(entry) && basic_row.is_none() {
                basic_row = Some(row);
            } else if !P::is_zero(entry) {
                return None;
            }
        }
        basic_row
    }

    /// Whether the current objective row reports an optimal basis.
    ///
    /// Every entry between the objective columns and the right hand side must be at least
    /// `-epsilon`; the comparison is a tolerance band, not exact, to absorb round-off.
    pub fn is_optimal(&self) -> bool {
        let zero = P::zero();
        (self.nr_objective_functions()..self.rhs_offset())
            .all(|j| approx_cmp::<P>(self.get_entry(0, j), &zero, &self.epsilon) != Ordering::Less)
    }

    /// Perform the row operations of the Simplex algorithm for the selected pivot.
    ///
    /// Normalizes the pivot row to a unit pivot element, eliminates the pivot column from every
    /// other row and updates the basic variable bijection.
    pub fn perform_row_operations(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(pivot_column < self.rhs_offset());
        debug_assert!(pivot_row >= self.nr_objective_functions() && pivot_row < self.height());

        let pivot_value = self.get_entry(pivot_row, pivot_column).clone();
        self.divide_row(pivot_row, &pivot_value);

        for row in 0..self.height() {
            if row != pivot_row {
                let multiplier = self.get_entry(row, pivot_column).clone();
                if !P::is_zero(&multiplier) {
                    self.subtract_row(row, pivot_row, &multiplier);
                }
            }
        }

        if let Some(previous) = self.basic_variable_of_row[pivot_row] {
            self.basic_variable_of_column[previous] = None;
        }
        self.basic_variable_of_column[pivot_column] = Some(pivot_row);
        self.basic_variable_of_row[pivot_row] = Some(pivot_column);
    }

    /// Divide one row by a divisor: `row = row / divisor`.
    fn divide_row(&mut self, row: usize, divisor: &P::Num) {
        debug_assert!(!P::is_zero(divisor));

        for cell in self.matrix.row_mut(row) {
            *cell = P::div(cell, divisor);
        }
    }

    /// Subtract a multiple of one row from another: `minuend = minuend - multiplier * subtrahend`.
    fn subtract_row(&mut self, minuend_row: usize, subtrahend_row: usize, multiplier: &P::Num) {
        let subtrahend = self.matrix.row(subtrahend_row).to_vec();
        for (cell, value) in self.matrix.row_mut(minuend_row).iter_mut().zip(&subtrahend) {
            *cell = P::sub(cell, &P::mul(value, multiplier));
        }
    }

    /// Remove the phase 1 objective row and the columns that may not take part in phase 2.
    ///
    /// Dropped are: the `W` column, every non-artificial column whose entry in the current
    /// objective row is positive beyond `epsilon`, and every artificial column that is not
    /// basic. The matrix is rebuilt without the dropped columns and the basic variable maps are
    /// recomputed from scratch, because the column indices shift.
    ///
    /// A no-op for tableaus without artificial variables.
    pub fn drop_phase_1_objective(&mut self) {
        if self.nr_objective_functions() == 1 {
            return;
        }

        let mut columns_to_drop = BTreeSet::new();
        columns_to_drop.insert(0);

        let zero = P::zero();
        for column in self.nr_objective_functions()..self.artificial_variable_offset() {
            if approx_cmp::<P>(self.get_entry(0, column), &zero, &self.epsilon)
                == Ordering::Greater
            {
                columns_to_drop.insert(column);
            }
        }
        for artificial in 0..self.nr_artificial_variables {
            let column = self.artificial_variable_offset() + artificial;
            if self.basic_row(column).is_none() {
                columns_to_drop.insert(column);
            }
        }

        let rows = (1..self.height())
            .map(|row| {
                (0..self.width())
                    .filter(|column| !columns_to_drop.contains(column))
                    .map(|column| self.get_entry(row, column).clone())
                    .collect()
            })
            .collect();

        // Remove the labels back to front so the earlier indices stay correct.
        for &column in columns_to_drop.iter().rev() {
            self.column_labels.remove(column);
        }

        self.matrix = DenseMatrix::from_rows(rows);
        self.nr_artificial_variables = 0;
        self.initialize_basic_variables(self.nr_objective_functions());
    }

    /// Extract the current solution.
    ///
    /// Per original decision variable: a dropped column or one basic in the objective row reads
    /// as zero; under degeneracy only the first variable claiming a basic row gets its right hand
    /// side value. For unrestricted-sign problems, the right hand side value of the extension
    /// variable's row is subtracted from every coordinate to recover the original signs.
    pub fn current_solution(&self) -> PointValuePair<P::Num> {
        let negative_var_column = self
            .column_labels
            .iter()
            .position(|label| label == NEGATIVE_VAR_COLUMN_LABEL);
        let negative_var_basic_row = negative_var_column.and_then(|column| self.basic_row(column));
        let most_negative = match negative_var_basic_row {
            Some(row) => self.get_entry(row, self.rhs_offset()).clone(),
            None => P::zero(),
        };
        let offset = if self.restrict_to_non_negative {
            P::zero()
        } else {
            most_negative
        };

        let mut used_basic_rows: HashSet<Option<usize>> = HashSet::new();
        let mut coefficients = Vec::with_capacity(self.nr_original_decision_variables());
        for i in 0..self.nr_original_decision_variables() {
            let label = format!("x{i}");
            let Some(column) = self.column_labels.iter().position(|l| l == &label) else {
                // the column was dropped after phase 1
                coefficients.push(P::zero());
                continue;
            };

            let basic_row = self.basic_row(column);
            if basic_row == Some(0) {
                // an unconstrained variable that never entered a constraint row
                coefficients.push(P::zero());
            } else if used_basic_rows.contains(&basic_row) {
                // under degeneracy multiple variables can share a basic row; the first
                // claimant got the row's value, the rest read as zero
                coefficients.push(P::sub(&P::zero(), &offset));
            } else {
                used_basic_rows.insert(basic_row);
                let value = match basic_row {
                    Some(row) => self.get_entry(row, self.rhs_offset()).clone(),
                    None => P::zero(),
                };
                coefficients.push(P::sub(&value, &offset));
            }
        }

        let value = self.objective.value::<P>(&coefficients);
        PointValuePair::new(&coefficients, value)
    }

    /// An entry of the tableau.
    pub fn get_entry(&self, row: usize, column: usize) -> &P::Num {
        self.matrix.get(row, column)
    }

    /// The row in which the given column is basic, if any.
    pub fn basic_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.width() - 1);

        self.basic_variable_of_column[column]
    }

    /// The column that is basic in the given row, if any.
    pub fn basic_variable(&self, row: usize) -> Option<usize> {
        debug_assert!(row < self.height());

        self.basic_variable_of_row[row]
    }

    /// Number of objective function rows: two during phase 1, one otherwise.
    pub fn nr_objective_functions(&self) -> usize {
        if self.nr_artificial_variables > 0 {
            2
        } else {
            1
        }
    }

    /// Index of the first slack variable column.
    pub fn slack_variable_offset(&self) -> usize {
        self.nr_objective_functions() + self.nr_decision_variables
    }

    /// Index of the first artificial variable column.
    pub fn artificial_variable_offset(&self) -> usize {
        self.slack_variable_offset() + self.nr_slack_variables
    }

    /// Index of the right hand side column.
    pub fn rhs_offset(&self) -> usize {
        self.width() - 1
    }

    /// Number of artificial variables. Zero once phase 1 has been dropped.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// Number of decision variables in the original problem, excluding the extension column.
    fn nr_original_decision_variables(&self) -> usize {
        self.objective.coefficients().len()
    }

    /// Width of the tableau, including the right hand side column.
    pub fn width(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Height of the tableau, including the objective rows.
    pub fn height(&self) -> usize {
        self.matrix.nr_rows()
    }
}

/// Minus one times the sum of all coefficients in the given slice.
///
/// This is the coefficient of the sign-extension column: the extension variable carries the
/// shared negative part of all unrestricted variables, so each row weighs it by the negated sum
/// of its own coefficients.
fn inverted_coefficient_sum<P: Policy>(coefficients: &[P::Num]) -> P::Num {
    coefficients
        .iter()
        .fold(P::zero(), |sum, coefficient| P::sub(&sum, coefficient))
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::tableau::SimplexTableau;
    use crate::algorithm::OptimizationError;
    use crate::data::linear_program::elements::{Objective, RelationalOperator};
    use crate::data::linear_program::general_form::{
        LinearConstraint, LinearConstraintSet, LinearObjectiveFunction,
    };
    use crate::data::number_types::float::FloatPolicy;

    /// `maximize 15x + 10y` subject to `x <= 2`, `y <= 3`, `x + y = 4`; the module documentation
    /// example.
    fn example_tableau() -> SimplexTableau<FloatPolicy> {
        let objective = LinearObjectiveFunction::new(vec![15., 10.], 0.);
        let constraints = LinearConstraintSet::new(vec![
            LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 2.),
            LinearConstraint::new(vec![0., 1.], RelationalOperator::Less, 3.),
            LinearConstraint::new(vec![1., 1.], RelationalOperator::Equal, 4.),
        ]);
        SimplexTableau::new(&objective, &constraints, Objective::Maximize, true, 1e-6).unwrap()
    }

    #[test]
    fn construction() {
        let tableau = example_tableau();

        assert_eq!(tableau.width(), 8);
        assert_eq!(tableau.height(), 5);
        assert_eq!(tableau.nr_objective_functions(), 2);
        assert_eq!(tableau.slack_variable_offset(), 4);
        assert_eq!(tableau.artificial_variable_offset(), 6);
        assert_eq!(tableau.rhs_offset(), 7);

        // W row is the negated sum of the rows that received an artificial variable.
        let w_row: Vec<f64> = (0..8).map(|j| *tableau.get_entry(0, j)).collect();
        assert_eq!(w_row, vec![-1., 0., -1., -1., 0., 0., 0., -4.]);
        // Z row carries the negated objective for a maximization.
        let z_row: Vec<f64> = (0..8).map(|j| *tableau.get_entry(1, j)).collect();
        assert_eq!(z_row, vec![0., 1., -15., -10., 0., 0., 0., 0.]);
        // Constraint rows carry coefficients, slack/artificial entries and right hand sides.
        let row: Vec<f64> = (0..8).map(|j| *tableau.get_entry(4, j)).collect();
        assert_eq!(row, vec![0., 0., 1., 1., 0., 0., 1., 4.]);
    }

    #[test]
    fn initial_basis() {
        let tableau = example_tableau();

        assert_eq!(tableau.basic_row(4), Some(2));
        assert_eq!(tableau.basic_row(5), Some(3));
        assert_eq!(tableau.basic_row(6), Some(4));
        assert_eq!(tableau.basic_row(2), None);
        assert_eq!(tableau.basic_variable(2), Some(4));
        assert_eq!(tableau.basic_variable(4), Some(6));

        assert!(!tableau.is_optimal());
    }

    #[test]
    fn pivoting_updates_rows_and_basis() {
        let mut tableau = example_tableau();

        // Bring x0 into the basis through the first constraint row.
        tableau.perform_row_operations(2, 2);

        let w_row: Vec<f64> = (0..8).map(|j| *tableau.get_entry(0, j)).collect();
        assert_eq!(w_row, vec![-1., 0., 0., -1., 1., 0., 0., -2.]);
        let z_row: Vec<f64> = (0..8).map(|j| *tableau.get_entry(1, j)).collect();
        assert_eq!(z_row, vec![0., 1., 0., -10., 15., 0., 0., 30.]);
        let third_constraint: Vec<f64> = (0..8).map(|j| *tableau.get_entry(4, j)).collect();
        assert_eq!(third_constraint, vec![0., 0., 0., 1., -1., 0., 1., 2.]);

        assert_eq!(tableau.basic_row(2), Some(2));
        assert_eq!(tableau.basic_row(4), None);
        assert_eq!(tableau.basic_variable(2), Some(2));
    }

    #[test]
    fn dropping_phase_1_shrinks_the_tableau() {
        let mut tableau = example_tableau();

        // Drive both constraint pivots so that the artificial variable leaves the basis.
        tableau.perform_row_operations(2, 2);
        tableau.perform_row_operations(3, 4);
        assert!(tableau.is_optimal());

        tableau.drop_phase_1_objective();

        // W row, W column and the non-basic artificial column are gone.
        assert_eq!(tableau.height(), 4);
        assert_eq!(tableau.width(), 6);
        assert_eq!(tableau.nr_artificial_variables(), 0);
        assert_eq!(tableau.nr_objective_functions(), 1);
        assert_eq!(tableau.basic_row(1), Some(1));
        assert_eq!(tableau.basic_row(2), Some(3));
    }

    #[test]
    fn solution_extraction_after_phase_2() {
        let mut tableau = example_tableau();

        tableau.perform_row_operations(2, 2);
        tableau.perform_row_operations(3, 4);
        tableau.drop_phase_1_objective();

        // x = 2, y = 2 is optimal with value 50.
        assert!(tableau.is_optimal());
        let solution = tableau.current_solution();
        assert_eq!(solution.point(), &[2., 2.]);
        assert_eq!(solution.value(), &50.);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let objective = LinearObjectiveFunction::new(vec![1., 2.], 0.);
        let constraints = LinearConstraintSet::new(vec![LinearConstraint::new(
            vec![1., 2., 3.],
            RelationalOperator::Less,
            4.,
        )]);

        let result =
            SimplexTableau::<FloatPolicy>::new(&objective, &constraints, Objective::Minimize, true, 1e-6);
        assert_eq!(
            result.err(),
            Some(OptimizationError::DimensionMismatch {
                found: 3,
                expected: 2,
            }),
        );
    }
}
