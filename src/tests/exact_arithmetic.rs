//! The same algorithm running on non-float number types.
//!
//! Exact policies need a small positive tolerance because the comparison helpers treat the
//! tolerance as a strict bound; the results themselves are exact.
use num::BigInt;

use crate::algorithm::two_phase::SimplexSolver;
use crate::data::linear_program::elements::{Objective, RelationalOperator};
use crate::data::linear_program::general_form::{
    LinearConstraint, LinearConstraintSet, LinearObjectiveFunction,
};
use crate::data::number_types::integer::BigIntPolicy;
use crate::data::number_types::rational::{Rational64, Rational64Policy};
use crate::R64;

fn rational_solver() -> SimplexSolver<Rational64Policy> {
    SimplexSolver::new(R64!(1, 1_000_000), R64!(1, 10_000_000_000))
}

#[test]
fn rationals_solve_both_phases_exactly() {
    // maximize 15x + 10y subject to x <= 2, y <= 3, x + y = 4
    let objective = LinearObjectiveFunction::new(vec![R64!(15), R64!(10)], R64!(0));
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(vec![R64!(1), R64!(0)], RelationalOperator::Less, R64!(2)),
        LinearConstraint::new(vec![R64!(0), R64!(1)], RelationalOperator::Less, R64!(3)),
        LinearConstraint::new(vec![R64!(1), R64!(1)], RelationalOperator::Equal, R64!(4)),
    ]);

    let mut solver = rational_solver();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    assert_eq!(solution.point(), &[R64!(2), R64!(2)]);
    assert_eq!(solution.value(), &R64!(50));
}

#[test]
fn rationals_represent_thirds_without_rounding() {
    // minimize x subject to 3x >= 1; the optimum is exactly 1/3
    let objective = LinearObjectiveFunction::new(vec![R64!(1)], R64!(0));
    let constraints = LinearConstraintSet::new(vec![LinearConstraint::new(
        vec![R64!(3)],
        RelationalOperator::Greater,
        R64!(1),
    )]);

    let mut solver = rational_solver();
    let solution = solver
        .optimize(&objective, &constraints, Objective::Minimize, true)
        .unwrap();

    assert_eq!(solution.point(), &[R64!(1, 3)]);
    assert_eq!(solution.value(), &R64!(1, 3));
}

#[test]
fn rational_result_matches_the_float_result() {
    let objective = LinearObjectiveFunction::new(vec![2., 3.], 0.);
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(vec![1., 1.], RelationalOperator::Less, 10.),
        LinearConstraint::new(vec![1., 0.], RelationalOperator::Less, 4.),
    ]);
    let mut float_solver = SimplexSolver::default();
    let float_solution = float_solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    let to_rational = |values: &[f64]| -> Vec<Rational64> {
        values.iter().map(|&v| R64!(v as i64)).collect()
    };
    let objective = LinearObjectiveFunction::new(to_rational(&[2., 3.]), R64!(0));
    let constraints = LinearConstraintSet::new(vec![
        LinearConstraint::new(to_rational(&[1., 1.]), RelationalOperator::Less, R64!(10)),
        LinearConstraint::new(to_rational(&[1., 0.]), RelationalOperator::Less, R64!(4)),
    ]);
    let mut rational_solver = rational_solver();
    let rational_solution = rational_solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    let expected: Vec<Rational64> = float_solution
        .point()
        .iter()
        .map(|&coordinate| R64!(coordinate as i64))
        .collect();
    assert_eq!(rational_solution.point(), &expected[..]);
    assert_eq!(rational_solution.value(), &R64!(*float_solution.value() as i64));
}

#[test]
fn big_integers_solve_problems_with_unit_pivots() {
    // maximize x subject to x <= 3; every pivot element is one, so no division truncates
    let objective = LinearObjectiveFunction::new(vec![BigInt::from(1)], BigInt::from(0));
    let constraints = LinearConstraintSet::new(vec![LinearConstraint::new(
        vec![BigInt::from(1)],
        RelationalOperator::Less,
        BigInt::from(3),
    )]);

    let mut solver = SimplexSolver::<BigIntPolicy>::new(BigInt::from(0), BigInt::from(0));
    let solution = solver
        .optimize(&objective, &constraints, Objective::Maximize, true)
        .unwrap();

    assert_eq!(solution.point(), &[BigInt::from(3)]);
    assert_eq!(solution.value(), &BigInt::from(3));
}
