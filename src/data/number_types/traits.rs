//! # The numeric capability set
//!
//! The Simplex engine performs no arithmetic of its own: every operation on a tableau entry is
//! routed through a [`Policy`], a stateless set of capabilities over an opaque number type. The
//! same algorithm thereby runs on floating point numbers, fixed or arbitrary precision integers
//! and exact rationals without a line of it changing.
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Arithmetic capabilities over an opaque number type.
///
/// Implementations are zero-sized and stateless: all operations are associated functions that are
/// pure in their arguments, so independent tableau instances can share a policy freely across
/// threads.
///
/// # Contract
///
/// `compare` must be a total order on the values the algorithm produces, and `is_zero`, `is_one`
/// and `is_below_zero` must agree with `compare` against `zero()` and `one()`. Dividing by a value
/// for which `is_zero` holds is a logic error on the caller's side; the tableau only divides by
/// pivot elements that passed the cut-off check.
///
/// `gcd`, `lcd` and `sqrt` are not used by the tableau itself and may panic for types where they
/// have no meaning, such as `gcd` over floating point numbers.
pub trait Policy {
    /// The number type this policy operates on.
    type Num: Clone + Debug + Display;

    /// Additive identity.
    fn zero() -> Self::Num;

    /// Multiplicative identity.
    fn one() -> Self::Num;

    /// Conversion from a small integer constant.
    fn from_i64(value: i64) -> Self::Num;

    /// Sum of two values.
    fn add(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Difference `a - b`.
    fn sub(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Product of two values.
    fn mul(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Quotient `a / b`. The divisor must not be zero.
    fn div(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Additive inverse.
    fn negate(a: &Self::Num) -> Self::Num;

    /// Absolute value.
    fn abs(a: &Self::Num) -> Self::Num;

    /// Total order over values.
    fn compare(a: &Self::Num, b: &Self::Num) -> Ordering;

    /// Exact equality, consistent with `compare`.
    fn eq(a: &Self::Num, b: &Self::Num) -> bool {
        Self::compare(a, b) == Ordering::Equal
    }

    /// Whether the value equals `zero()` exactly.
    fn is_zero(a: &Self::Num) -> bool;

    /// Whether the value equals `one()` exactly.
    fn is_one(a: &Self::Num) -> bool;

    /// Whether the value is strictly smaller than `zero()`.
    fn is_below_zero(a: &Self::Num) -> bool;

    /// Greatest common divisor. Only meaningful for integer instantiations.
    fn gcd(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Least common denominator. Only meaningful for integer instantiations.
    fn lcd(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Square root.
    fn sqrt(a: &Self::Num) -> Self::Num;
}

/// Whether two values are equal to within `eps`: `|y - x| - eps < 0`.
///
/// This is a tolerance band, not a ulp comparison; for exact number types an `eps` of zero makes
/// it strict inequality and thereby exact comparison minus the diagonal.
pub fn approx_eq<P: Policy>(x: &P::Num, y: &P::Num, eps: &P::Num) -> bool {
    P::is_below_zero(&P::sub(&P::abs(&P::sub(y, x)), eps))
}

/// Three-way comparison with an `eps`-wide band collapsed to `Equal`.
///
/// Returns `Equal` when [`approx_eq`] holds, otherwise `Less` or `Greater` by exact comparison.
pub fn approx_cmp<P: Policy>(x: &P::Num, y: &P::Num, eps: &P::Num) -> Ordering {
    if approx_eq::<P>(x, y, eps) {
        Ordering::Equal
    } else if P::is_below_zero(&P::sub(x, y)) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
