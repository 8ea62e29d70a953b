//! # Integer arithmetic
//!
//! Integer policies exist mostly to be wrapped by the exact rational type: the fraction
//! normalization needs `gcd` and `lcd` over its component type. Running the Simplex engine
//! directly on integers is possible but divisions then truncate.
use std::cmp::Ordering;

use num::BigInt;
use num::Integer;
use num::integer::Roots;
use num_traits::{One, Signed, Zero};

use crate::data::number_types::traits::Policy;

/// [`Policy`] over `i64`.
///
/// Arithmetic wraps on overflow in release builds; use [`BigIntPolicy`] when coefficients can
/// grow without bound.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Int64Policy;

impl Policy for Int64Policy {
    type Num = i64;

    fn zero() -> i64 {
        0
    }

    fn one() -> i64 {
        1
    }

    fn from_i64(value: i64) -> i64 {
        value
    }

    fn add(a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn sub(a: &i64, b: &i64) -> i64 {
        a - b
    }

    fn mul(a: &i64, b: &i64) -> i64 {
        a * b
    }

    fn div(a: &i64, b: &i64) -> i64 {
        a / b
    }

    fn negate(a: &i64) -> i64 {
        -a
    }

    fn abs(a: &i64) -> i64 {
        a.abs()
    }

    fn compare(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    fn is_zero(a: &i64) -> bool {
        *a == 0
    }

    fn is_one(a: &i64) -> bool {
        *a == 1
    }

    fn is_below_zero(a: &i64) -> bool {
        *a < 0
    }

    fn gcd(a: &i64, b: &i64) -> i64 {
        a.gcd(b)
    }

    fn lcd(a: &i64, b: &i64) -> i64 {
        a.lcm(b)
    }

    fn sqrt(a: &i64) -> i64 {
        Roots::sqrt(a)
    }
}

/// [`Policy`] over arbitrary precision integers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BigIntPolicy;

impl Policy for BigIntPolicy {
    type Num = BigInt;

    fn zero() -> BigInt {
        BigInt::zero()
    }

    fn one() -> BigInt {
        BigInt::one()
    }

    fn from_i64(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn add(a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn sub(a: &BigInt, b: &BigInt) -> BigInt {
        a - b
    }

    fn mul(a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn div(a: &BigInt, b: &BigInt) -> BigInt {
        a / b
    }

    fn negate(a: &BigInt) -> BigInt {
        -a
    }

    fn abs(a: &BigInt) -> BigInt {
        Signed::abs(a)
    }

    fn compare(a: &BigInt, b: &BigInt) -> Ordering {
        a.cmp(b)
    }

    fn is_zero(a: &BigInt) -> bool {
        Zero::is_zero(a)
    }

    fn is_one(a: &BigInt) -> bool {
        One::is_one(a)
    }

    fn is_below_zero(a: &BigInt) -> bool {
        a.is_negative()
    }

    fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        Integer::gcd(a, b)
    }

    fn lcd(a: &BigInt, b: &BigInt) -> BigInt {
        Integer::lcm(a, b)
    }

    fn sqrt(a: &BigInt) -> BigInt {
        Roots::sqrt(a)
    }
}
