//! # Floating point arithmetic
use std::cmp::Ordering;

use crate::data::number_types::traits::Policy;

/// [`Policy`] over `f64`.
///
/// Comparisons are exact; tolerating floating point round-off is the responsibility of the
/// epsilon-based helpers at the call site. `gcd` and `lcd` have no meaning for floating point
/// numbers and panic when called.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FloatPolicy;

impl Policy for FloatPolicy {
    type Num = f64;

    fn zero() -> f64 {
        0_f64
    }

    fn one() -> f64 {
        1_f64
    }

    fn from_i64(value: i64) -> f64 {
        value as f64
    }

    fn add(a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn sub(a: &f64, b: &f64) -> f64 {
        a - b
    }

    fn mul(a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn div(a: &f64, b: &f64) -> f64 {
        a / b
    }

    fn negate(a: &f64) -> f64 {
        -a
    }

    fn abs(a: &f64) -> f64 {
        a.abs()
    }

    fn compare(a: &f64, b: &f64) -> Ordering {
        if a > b {
            Ordering::Greater
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    fn is_zero(a: &f64) -> bool {
        *a == 0_f64
    }

    fn is_one(a: &f64) -> bool {
        *a == 1_f64
    }

    fn is_below_zero(a: &f64) -> bool {
        *a < 0_f64
    }

    fn gcd(_a: &f64, _b: &f64) -> f64 {
        unimplemented!("gcd is not defined for floating point numbers")
    }

    fn lcd(_a: &f64, _b: &f64) -> f64 {
        unimplemented!("lcd is not defined for floating point numbers")
    }

    fn sqrt(a: &f64) -> f64 {
        a.sqrt()
    }
}
