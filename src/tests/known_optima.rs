//! Bounded feasible problems with hand-checked optima.
use crate::algorithm::two_phase::strategy::pivot_rule::PivotSelectionRule;
use crate::algorithm::two_phase::SimplexSolver;
use crate::data::linear_program::elements::{Objective, RelationalOperator};
use crate::data::linear_program::general_form::{
    LinearConstraint, LinearConstraintSet, LinearObjectiveFunction,
};

/// `maximize 15x + 10y` subject to `x <= 2`, `y <= 3` and `x + y = 4`.
///
/// The equality constraint forces a phase 1; the optimum is `x = 2`, `y = 2` with value `50`.
fn problem_with_equality() -> (LinearObjectiveFunction<f64>, LinearConstraintSet<f64>) {
    (
        LinearObjectiveFunction::new(vec![15., 10.], 0.),
        LinearConstraintSet::new(vec![
            LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 2.),
            LinearConstraint::new(vec![0., 1.], RelationalOperator::Less, 3.),
            LinearConstraint::new(vec![1., 1.], RelationalOperator::Equal, 4.),
        ]),
    )
}

#[test]
fn maximize_through_both_phases() {
    let (objective, constraints) = problem_with_equality();

    let mut solver = SimplexSolver::default();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    assert_eq!(solution.point(), &[2., 2.]);
    assert_eq!(solution.value(), &50.);
}

#[test]
fn pivot_rules_agree_on_the_optimum() {
    let (objective, constraints) = problem_with_equality();

    for rule in [PivotSelectionRule::Dantzig, PivotSelectionRule::Bland] {
        let mut solver = SimplexSolver::default().with_pivot_rule(rule);
        let solution = solver
            .optimize(&objective, &constraints, Objective::Maximize, true)
            .unwrap();

        assert_eq!(solution.point(), &[2., 2.]);
        assert_eq!(solution.value(), &50.);
    }
}

#[test]
fn maximize_with_inequalities_only() {
    // maximize 3x + 5y subject to x + y <= 4 and x <= 2; no phase 1 needed
    let objective = LinearObjectiveFunction::new(vec![3., 5.], 0.);
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(vec![1., 1.], RelationalOperator::Less, 4.),
        LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 2.),
    ]);

    let mut solver = SimplexSolver::default();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    assert_eq!(solution.point(), &[0., 4.]);
    assert_eq!(solution.value(), &20.);
}

#[test]
fn objective_constant_is_carried_into_the_value() {
    let objective = LinearObjectiveFunction::new(vec![3., 5.], 7.);
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(vec![1., 1.], RelationalOperator::Less, 4.),
        LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 2.),
    ]);

    let mut solver = SimplexSolver::default();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    assert_eq!(solution.point(), &[0., 4.]);
    assert_eq!(solution.value(), &27.);
}

#[test]
fn minimize_with_surplus_variable() {
    // minimize 2x + 3y subject to x + y >= 4
    let objective = LinearObjectiveFunction::new(vec![2., 3.], 0.);
    let constraints = LinearConstraintSet::new(vec![LinearConstraint::new(
        vec![1., 1.],
        RelationalOperator::Greater,
        4.,
    )]);

    let mut solver = SimplexSolver::default();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Minimize, true)
        .unwrap();

    assert_eq!(solution.point(), &[4., 0.]);
    assert_eq!(solution.value(), &8.);
}

#[test]
fn origin_can_be_optimal_without_any_pivot() {
    let objective = LinearObjectiveFunction::new(vec![1., 1.], 0.);
    let constraints = LinearConstraintSet::new(vec![LinearConstraint::new(
        vec![1., 1.],
        RelationalOperator::Less,
        1.,
    )]);

    let mut solver = SimplexSolver::default();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Minimize, true)
        .unwrap();

    assert_eq!(solution.point(), &[0., 0.]);
    assert_eq!(solution.value(), &0.);
    assert_eq!(solver.iterations(), 0);
}

#[test]
fn unrestricted_variables_can_go_negative() {
    // minimize x subject to x + y = 0 and y <= 5, with unrestricted signs
    let objective = LinearObjectiveFunction::new(vec![1., 0.], 0.);
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(vec![1., 1.], RelationalOperator::Equal, 0.),
        LinearConstraint::new(vec![0., 1.], RelationalOperator::Less, 5.),
    ]);

    let mut solver = SimplexSolver::default();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Minimize, false)
        .unwrap();

    assert_eq!(solution.point(), &[-5., 5.]);
    assert_eq!(solution.value(), &-5.);
}

#[test]
fn degenerate_vertex_is_handled_by_both_rules() {
    // maximize x + y subject to x <= 2, y <= 2 and the redundant x + y <= 4; the optimal
    // vertex is overdetermined, so the minimum-ratio test ties and the tie-break decides
    let objective = LinearObjectiveFunction::new(vec![1., 1.], 0.);
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 2.),
        LinearConstraint::new(vec![0., 1.], RelationalOperator::Less, 2.),
        LinearConstraint::new(vec![1., 1.], RelationalOperator::Less, 4.),
    ]);

    for rule in [PivotSelectionRule::Dantzig, PivotSelectionRule::Bland] {
        let mut solver = SimplexSolver::default().with_pivot_rule(rule);
        let solution = solver
            .optimize(&objective, &constraints, Objective::Maximize, true)
            .unwrap();

        assert_eq!(solution.point(), &[2., 2.]);
        assert_eq!(solution.value(), &4.);
    }
}

#[test]
fn negative_right_hand_sides_are_normalized_away() {
    // -x - y >= -4 is x + y <= 4 in disguise
    let objective = LinearObjectiveFunction::new(vec![3., 5.], 0.);
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(vec![-1., -1.], RelationalOperator::Greater, -4.),
        LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 2.),
    ]);

    let mut solver = SimplexSolver::default();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    assert_eq!(solution.point(), &[0., 4.]);
    assert_eq!(solution.value(), &20.);
}
