//! # Exact rational arithmetic
//!
//! A fraction over the integer type of an inner [`Policy`]. The Simplex engine sees rationals
//! only through [`RationalPolicy`], so an exact solve is a type-parameter change away from a
//! floating point one.
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::data::number_types::integer::{BigIntPolicy, Int64Policy};
use crate::data::number_types::traits::Policy;

/// Rational number over `i64` components.
pub type Rational64 = Rational<Int64Policy>;
/// Rational number over arbitrary precision integer components.
pub type RationalBig = Rational<BigIntPolicy>;
/// [`Policy`] producing [`Rational64`] values.
pub type Rational64Policy = RationalPolicy<Int64Policy>;
/// [`Policy`] producing [`RationalBig`] values.
pub type RationalBigPolicy = RationalPolicy<BigIntPolicy>;

/// A rational number as a normalized numerator/denominator pair.
///
/// # Invariant
///
/// Values are kept normalized: the denominator is strictly positive, any sign lives in the
/// numerator, numerator and denominator share no divisor and zero is represented as `0/1`.
/// Construction establishes the invariant, every arithmetic result re-establishes it.
pub struct Rational<P: Policy> {
    numerator: P::Num,
    denominator: P::Num,
}

impl<P: Policy> Rational<P> {
    /// Create a new rational from a numerator and denominator.
    ///
    /// The denominator must not be zero.
    pub fn new(numerator: P::Num, denominator: P::Num) -> Self {
        debug_assert!(!P::is_zero(&denominator));

        Self::normalize(numerator, denominator)
    }

    /// Create a whole number, with denominator one.
    pub fn from_integer(numerator: P::Num) -> Self {
        Self {
            numerator,
            denominator: P::one(),
        }
    }

    /// Move the sign to the numerator and divide out the greatest common divisor.
    fn normalize(numerator: P::Num, denominator: P::Num) -> Self {
        if P::is_zero(&numerator) {
            return Self {
                numerator: P::zero(),
                denominator: P::one(),
            };
        }

        let (mut numerator, mut denominator) = if P::is_below_zero(&denominator) {
            (P::negate(&numerator), P::negate(&denominator))
        } else {
            (numerator, denominator)
        };

        let gcd = P::gcd(&P::abs(&numerator), &denominator);
        if !P::is_one(&gcd) {
            numerator = P::div(&numerator, &gcd);
            denominator = P::div(&denominator, &gcd);
        }

        Self {
            numerator,
            denominator,
        }
    }

    /// The numerator, carrying the sign.
    pub fn numerator(&self) -> &P::Num {
        &self.numerator
    }

    /// The denominator, strictly positive.
    pub fn denominator(&self) -> &P::Num {
        &self.denominator
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        P::is_zero(&self.numerator)
    }
}

impl<P: Policy> Clone for Rational<P> {
    fn clone(&self) -> Self {
        Self {
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }
}

impl<P: Policy> PartialEq for Rational<P> {
    fn eq(&self, other: &Self) -> bool {
        // Both sides are normalized, comparison is component-wise.
        P::eq(&self.numerator, &other.numerator) && P::eq(&self.denominator, &other.denominator)
    }
}

impl<P: Policy> Eq for Rational<P> {}

impl<P: Policy> fmt::Debug for Rational<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.numerator, self.denominator)
    }
}

impl<P: Policy> fmt::Display for Rational<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if P::is_one(&self.denominator) {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// [`Policy`] over [`Rational`] values with components in an inner integer policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RationalPolicy<P> {
    _inner: PhantomData<P>,
}

impl<P: Policy> Policy for RationalPolicy<P> {
    type Num = Rational<P>;

    fn zero() -> Rational<P> {
        Rational::from_integer(P::zero())
    }

    fn one() -> Rational<P> {
        Rational::from_integer(P::one())
    }

    fn from_i64(value: i64) -> Rational<P> {
        Rational::from_integer(P::from_i64(value))
    }

    fn add(a: &Rational<P>, b: &Rational<P>) -> Rational<P> {
        if a.is_zero() {
            return b.clone();
        }
        if b.is_zero() {
            return a.clone();
        }

        if P::is_one(&a.denominator) && P::is_one(&b.denominator) {
            return Rational::from_integer(P::add(&a.numerator, &b.numerator));
        }

        let denominator = P::lcd(&a.denominator, &b.denominator);
        let left = P::mul(&a.numerator, &P::div(&denominator, &a.denominator));
        let right = P::mul(&b.numerator, &P::div(&denominator, &b.denominator));
        Rational::new(P::add(&left, &right), denominator)
    }

    fn sub(a: &Rational<P>, b: &Rational<P>) -> Rational<P> {
        if b.is_zero() {
            return a.clone();
        }
        if a.is_zero() {
            return Self::negate(b);
        }

        if P::is_one(&a.denominator) && P::is_one(&b.denominator) {
            return Rational::from_integer(P::sub(&a.numerator, &b.numerator));
        }

        let denominator = P::lcd(&a.denominator, &b.denominator);
        let left = P::mul(&a.numerator, &P::div(&denominator, &a.denominator));
        let right = P::mul(&b.numerator, &P::div(&denominator, &b.denominator));
        Rational::new(P::sub(&left, &right), denominator)
    }

    fn mul(a: &Rational<P>, b: &Rational<P>) -> Rational<P> {
        Rational::new(
            P::mul(&a.numerator, &b.numerator),
            P::mul(&a.denominator, &b.denominator),
        )
    }

    fn div(a: &Rational<P>, b: &Rational<P>) -> Rational<P> {
        debug_assert!(!b.is_zero());

        if a.is_zero() {
            return Self::zero();
        }

        Rational::new(
            P::mul(&a.numerator, &b.denominator),
            P::mul(&a.denominator, &b.numerator),
        )
    }

    fn negate(a: &Rational<P>) -> Rational<P> {
        Rational {
            numerator: P::negate(&a.numerator),
            denominator: a.denominator.clone(),
        }
    }

    fn abs(a: &Rational<P>) -> Rational<P> {
        Rational {
            numerator: P::abs(&a.numerator),
            denominator: a.denominator.clone(),
        }
    }

    fn compare(a: &Rational<P>, b: &Rational<P>) -> Ordering {
        // Denominators are positive, cross-multiplication preserves the order.
        P::compare(
            &P::mul(&a.numerator, &b.denominator),
            &P::mul(&b.numerator, &a.denominator),
        )
    }

    fn is_zero(a: &Rational<P>) -> bool {
        a.is_zero()
    }

    fn is_one(a: &Rational<P>) -> bool {
        P::eq(&a.numerator, &a.denominator)
    }

    fn is_below_zero(a: &Rational<P>) -> bool {
        P::is_below_zero(&a.numerator)
    }

    fn gcd(_a: &Rational<P>, _b: &Rational<P>) -> Rational<P> {
        unimplemented!("gcd is not defined for rational numbers")
    }

    fn lcd(_a: &Rational<P>, _b: &Rational<P>) -> Rational<P> {
        unimplemented!("lcd is not defined for rational numbers")
    }

    fn sqrt(a: &Rational<P>) -> Rational<P> {
        Rational::new(P::sqrt(&a.numerator), P::sqrt(&a.denominator))
    }
}

/// Shorthand for [`Rational64`] values in tests.
#[macro_export]
macro_rules! R64 {
    ($numerator:expr) => {
        $crate::data::number_types::rational::Rational64::new($numerator, 1)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::data::number_types::rational::Rational64::new($numerator, $denominator)
    };
}
