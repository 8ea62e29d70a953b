//! # Two-phase Simplex method
//!
//! Solves linear programs in two phases: phase 1 drives the artificial variables out of the
//! basis to find a basic feasible solution, phase 2 optimizes the actual objective from there.
//! Problems without artificial variables skip phase 1 entirely.
use std::cmp::Ordering;

use itertools::Itertools;
use log::{debug, trace};

use crate::algorithm::two_phase::strategy::pivot_rule::PivotSelectionRule;
use crate::algorithm::two_phase::tableau::SimplexTableau;
use crate::algorithm::OptimizationError;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::{LinearConstraintSet, LinearObjectiveFunction};
use crate::data::linear_program::solution::PointValuePair;
use crate::data::number_types::float::FloatPolicy;
use crate::data::number_types::traits::{approx_cmp, approx_eq, Policy};

pub mod strategy;
pub mod tableau;

/// Default tolerance for optimality and feasibility tests.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Default threshold under which a pivot element is treated as zero.
///
/// Pivoting on a tiny element divides an entire row by it, amplifying round-off; such elements
/// are cut off rather than pivoted on.
pub const DEFAULT_CUT_OFF: f64 = 1e-10;

/// Called with the latest feasible solution whenever one becomes available.
///
/// Useful to retain a best-known solution when a solve ends in
/// [`IterationLimit`](OptimizationError::IterationLimit).
pub type SolutionCallback<N> = Box<dyn FnMut(&PointValuePair<N>)>;

/// Two-phase Simplex solver over dense tableaus.
///
/// Generic over the arithmetic through a [`Policy`]; the same algorithm runs on floating point
/// numbers, integers and exact rationals. A solver instance is reusable: each call to
/// [`optimize`](Self::optimize) builds a fresh tableau.
pub struct SimplexSolver<P: Policy> {
    /// Tolerance for optimality and feasibility tests.
    epsilon: P::Num,
    /// Threshold under which a pivot element is treated as zero.
    cut_off: P::Num,
    /// How the entering column is chosen.
    pivot_rule: PivotSelectionRule,
    /// Pivot budget for a single solve, phases combined.
    max_iterations: u64,
    /// Pivots performed by the most recent solve.
    iterations: u64,
    /// Observer for intermediate feasible solutions.
    solution_callback: Option<SolutionCallback<P::Num>>,
}

impl Default for SimplexSolver<FloatPolicy> {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON, DEFAULT_CUT_OFF)
    }
}

impl<P: Policy> SimplexSolver<P> {
    /// Create a solver with the given tolerances, the default pivot rule and an unlimited
    /// iteration budget.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Tolerance for optimality and feasibility tests.
    /// * `cut_off`: Entries smaller than this are not considered as pivot elements.
    pub fn new(epsilon: P::Num, cut_off: P::Num) -> Self {
        Self {
            epsilon,
            cut_off,
            pivot_rule: PivotSelectionRule::default(),
            max_iterations: u64::MAX,
            iterations: 0,
            solution_callback: None,
        }
    }

    /// Replace the rule used to choose the entering column.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotSelectionRule) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Bound the number of pivots a single solve may perform.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Register an observer for intermediate feasible solutions.
    ///
    /// The callback fires once when phase 1 completes and after every phase 2 pivot, each time
    /// with the solution of the current feasible basis.
    #[must_use]
    pub fn with_solution_callback(mut self, callback: SolutionCallback<P::Num>) -> Self {
        self.solution_callback = Some(callback);
        self
    }

    /// Number of pivots performed by the most recent call to [`optimize`](Self::optimize).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Solve a linear program.
    ///
    /// # Arguments
    ///
    /// * `objective`: Function to optimize, defining the problem dimension.
    /// * `constraints`: Feasible region description; any mix of `=`, `<=` and `>=` constraints.
    /// * `goal`: Whether to maximize or minimize the objective.
    /// * `restrict_to_non_negative`: Whether variables may only take non-negative values.
    ///
    /// # Return value
    ///
    /// The optimal point and the objective value attained there.
    ///
    /// # Errors
    ///
    /// * [`OptimizationError::DimensionMismatch`]: A constraint's length differs from the
    ///   objective's.
    /// * [`OptimizationError::Infeasible`]: No point satisfies all constraints.
    /// * [`OptimizationError::Unbounded`]: The objective improves without bound.
    /// * [`OptimizationError::IterationLimit`]: The pivot budget ran out.
    pub fn optimize(
        &mut self,
        objective: &LinearObjectiveFunction<P::Num>,
        constraints: &LinearConstraintSet<P::Num>,
        goal: Objective,
        restrict_to_non_negative: bool,
    ) -> Result<PointValuePair<P::Num>, OptimizationError> {
        self.iterations = 0;

        let mut tableau = SimplexTableau::<P>::new(
            objective,
            constraints,
            goal,
            restrict_to_non_negative,
            self.epsilon.clone(),
        )?;
        debug!(
            "starting solve: {} constraints, {} artificial variables",
            constraints.len(),
            tableau.nr_artificial_variables(),
        );

        self.solve_phase_1(&mut tableau)?;
        tableau.drop_phase_1_objective();
        debug!("phase 1 complete after {} iterations", self.iterations);

        // From here on every basis is feasible.
        if let Some(callback) = &mut self.solution_callback {
            callback(&tableau.current_solution());
        }

        while !tableau.is_optimal() {
            self.do_iteration(&mut tableau)?;
            if let Some(callback) = &mut self.solution_callback {
                callback(&tableau.current_solution());
            }
        }
        debug!("optimal basis reached after {} iterations", self.iterations);

        // The tolerances can be too coarse for a problem with very small coefficients; the
        // optimal basis then encodes a point that violates the variable bounds.
        let solution = tableau.current_solution();
        if restrict_to_non_negative {
            let zero = P::zero();
            let negative = solution
                .point()
                .iter()
                .any(|coordinate| {
                    approx_cmp::<P>(coordinate, &zero, &self.epsilon) == Ordering::Less
                });
            if negative {
                return Err(OptimizationError::Infeasible);
            }
        }

        Ok(solution)
    }

    /// Find a basic feasible solution by minimizing the sum of the artificial variables.
    ///
    /// A no-op for tableaus without artificial variables. When the minimized sum is not zero
    /// within `epsilon`, some artificial variable is stuck at a positive value and the problem
    /// has no feasible solution.
    fn solve_phase_1(
        &mut self,
        tableau: &mut SimplexTableau<P>,
    ) -> Result<(), OptimizationError> {
        if tableau.nr_artificial_variables() == 0 {
            return Ok(());
        }

        while !tableau.is_optimal() {
            self.do_iteration(tableau)?;
        }

        let artificial_variable_sum = tableau.get_entry(0, tableau.rhs_offset());
        if !approx_eq::<P>(artificial_variable_sum, &P::zero(), &self.epsilon) {
            return Err(OptimizationError::Infeasible);
        }

        Ok(())
    }

    /// Run a single pivot: charge the budget, select the pivot and apply the row operations.
    fn do_iteration(&mut self, tableau: &mut SimplexTableau<P>) -> Result<(), OptimizationError> {
        if self.iterations == self.max_iterations {
            return Err(OptimizationError::IterationLimit {
                max: self.max_iterations,
            });
        }
        self.iterations += 1;

        let Some(pivot_column) = self.select_pivot_column(tableau) else {
            // No entering column within tolerance; the optimality test will end the loop.
            return Ok(());
        };
        let Some(pivot_row) = self.select_pivot_row(tableau, pivot_column) else {
            return Err(OptimizationError::Unbounded);
        };
        trace!(
            "iteration {}: pivot at column {pivot_column}, row {pivot_row}",
            self.iterations,
        );

        tableau.perform_row_operations(pivot_column, pivot_row);

        Ok(())
    }

    /// Choose the column that enters the basis, if any has a negative reduced cost.
    ///
    /// Dantzig's rule takes the most negative reduced cost; the comparison against the running
    /// minimum is exact so that the choice is deterministic. Bland's rule settles for the first
    /// negative column that also admits a pivot element, which prevents cycling.
    fn select_pivot_column(&self, tableau: &SimplexTableau<P>) -> Option<usize> {
        let mut min_value = P::zero();
        let mut min_column = None;
        for column in tableau.nr_objective_functions()..tableau.rhs_offset() {
            let entry = tableau.get_entry(0, column);
            if P::is_below_zero(&P::sub(entry, &min_value)) {
                min_value = entry.clone();
                min_column = Some(column);
                if self.pivot_rule == PivotSelectionRule::Bland
                    && self.is_valid_pivot_column(tableau, column)
                {
                    break;
                }
            }
        }
        min_column
    }

    /// Whether the column contains at least one usable pivot element.
    fn is_valid_pivot_column(&self, tableau: &SimplexTableau<P>, column: usize) -> bool {
        let zero = P::zero();
        (tableau.nr_objective_functions()..tableau.height()).any(|row| {
            approx_cmp::<P>(tableau.get_entry(row, column), &zero, &self.cut_off)
                == Ordering::Greater
        })
    }

    /// Choose the row that leaves the basis by the minimum ratio test.
    ///
    /// Candidate rows need a pivot element above the cut-off; among them the ratio of right hand
    /// side to pivot element is minimized with exact comparisons. Ties are broken in favor of a
    /// row whose basic artificial variable can leave the basis, and otherwise towards the lowest
    /// basic variable index to protect against cycling. `None` means the objective is unbounded
    /// in this column's direction.
    fn select_pivot_row(
        &self,
        tableau: &SimplexTableau<P>,
        pivot_column: usize,
    ) -> Option<usize> {
        let zero = P::zero();
        let candidates: Vec<(usize, P::Num)> = (tableau.nr_objective_functions()
            ..tableau.height())
            .filter_map(|row| {
                let entry = tableau.get_entry(row, pivot_column);
                if approx_cmp::<P>(entry, &zero, &self.cut_off) == Ordering::Greater {
                    let rhs = tableau.get_entry(row, tableau.rhs_offset());
                    Some((row, P::abs(&P::div(rhs, entry))))
                } else {
                    None
                }
            })
            .collect();

        let minimum_ratio_rows = candidates
            .iter()
            .min_set_by(|(_, ratio_a), (_, ratio_b)| P::compare(ratio_a, ratio_b));
        match minimum_ratio_rows.len() {
            0 => None,
            1 => Some(minimum_ratio_rows[0].0),
            _ => {
                // Prefer kicking a basic artificial variable out of the basis.
                if tableau.nr_artificial_variables() > 0 {
                    let one = P::one();
                    for artificial in 0..tableau.nr_artificial_variables() {
                        let column = tableau.artificial_variable_offset() + artificial;
                        for &&(row, _) in &minimum_ratio_rows {
                            let entry = tableau.get_entry(row, column);
                            if approx_eq::<P>(entry, &one, &self.epsilon)
                                && tableau.basic_row(column) == Some(row)
                            {
                                return Some(row);
                            }
                        }
                    }
                }

                // Anti-cycling: take the row holding the lowest basic variable index.
                let mut min_index = tableau.width();
                let mut min_row = None;
                for &&(row, _) in &minimum_ratio_rows {
                    if let Some(variable) = tableau.basic_variable(row) {
                        if variable < min_index {
                            min_index = variable;
                            min_row = Some(row);
                        }
                    }
                }
                min_row.or(Some(minimum_ratio_rows[0].0))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::strategy::pivot_rule::PivotSelectionRule;
    use crate::algorithm::two_phase::SimplexSolver;
    use crate::data::linear_program::elements::{Objective, RelationalOperator};
    use crate::data::linear_program::general_form::{
        LinearConstraint, LinearConstraintSet, LinearObjectiveFunction,
    };

    #[test]
    fn solver_is_reusable() {
        let mut solver = SimplexSolver::default();
        let objective = LinearObjectiveFunction::new(vec![1.], 0.);
        let constraints = LinearConstraintSet::new(vec![LinearConstraint::new(
            vec![1.],
            RelationalOperator::Less,
            3.,
        )]);

        for _ in 0..2 {
            let solution = solver
                .optimize(&objective, &constraints, Objective::Maximize, true)
                .unwrap();
            assert_eq!(solution.point(), &[3.]);
            assert_eq!(solution.value(), &3.);
        }
    }

    #[test]
    fn pivot_count_is_reported() {
        let mut solver = SimplexSolver::default().with_pivot_rule(PivotSelectionRule::Bland);
        let objective = LinearObjectiveFunction::new(vec![2., 3.], 0.);
        let constraints = LinearConstraintSet::new(vec![
            LinearConstraint::new(vec![1., 1.], RelationalOperator::Less, 10.),
            LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 4.),
        ]);

        solver
            .optimize(&objective, &constraints, Objective::Maximize, true)
            .unwrap();
        assert!(solver.iterations() > 0);
    }
}
