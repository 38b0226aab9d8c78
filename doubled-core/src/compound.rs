//! Two-component identities.
//!
//! Each function combines doubled operands using the primitives in
//! [`eft`](crate::eft) and returns a normalized pair. Products drop the
//! `lo * lo` term: it lies below the representable precision and keeping
//! it would change the error bound and cost.

use crate::doubled::Doubled;
use crate::eft::{quick_two_sum, two_diff, two_prod, two_sqr, two_sum};
use crate::real::Real;

/// Doubled + doubled. Satisfies an IEEE-style error bound (Briggs, Kahan).
#[inline]
pub fn two_two_sum<D: Real>(a: Doubled<D>, b: Doubled<D>) -> Doubled<D> {
    let (s1, s2) = two_sum(a.hi, b.hi);
    let (t1, t2) = two_sum(a.lo, b.lo);
    let s2 = s2 + t1;
    let (s1, s2) = quick_two_sum(s1, s2);
    let s2 = s2 + t2;
    let (hi, lo) = quick_two_sum(s1, s2);
    Doubled { hi, lo }
}

/// Doubled - doubled.
#[inline]
pub fn two_two_diff<D: Real>(a: Doubled<D>, b: Doubled<D>) -> Doubled<D> {
    let (s1, s2) = two_diff(a.hi, b.hi);
    let (t1, t2) = two_diff(a.lo, b.lo);
    let s2 = s2 + t1;
    let (s1, s2) = quick_two_sum(s1, s2);
    let s2 = s2 + t2;
    let (hi, lo) = quick_two_sum(s1, s2);
    Doubled { hi, lo }
}

/// Doubled * doubled.
#[inline]
pub fn two_two_prod<D: Real>(a: Doubled<D>, b: Doubled<D>, splitter: D) -> Doubled<D> {
    let (p1, p2) = two_prod(a.hi, b.hi, splitter);
    // Cross terms are added to each other first so the result does not
    // depend on operand order.
    let p2 = p2 + (a.hi * b.lo + a.lo * b.hi);
    let (hi, lo) = quick_two_sum(p1, p2);
    Doubled { hi, lo }
}

/// Doubled squared.
#[inline]
pub fn two_two_sqr<D: Real>(a: Doubled<D>, splitter: D) -> Doubled<D> {
    let (p1, p2) = two_sqr(a.hi, splitter);
    let t = a.hi * a.lo;
    let p2 = p2 + (t + t);
    let (hi, lo) = quick_two_sum(p1, p2);
    Doubled { hi, lo }
}

/// Doubled / doubled by three-term long division.
///
/// `q1` comes straight from the leading components; `q2` and `q3` are
/// corrections computed from the successive remainders.
#[inline]
pub fn two_two_div<D: Real>(a: Doubled<D>, b: Doubled<D>, splitter: D) -> Doubled<D> {
    let q1 = a.hi / b.hi;
    let r = two_two_diff(a, two_one_prod(b, q1, splitter));

    let q2 = r.hi / b.hi;
    let r = two_two_diff(r, two_one_prod(b, q2, splitter));

    let q3 = r.hi / b.hi;

    let (hi, lo) = quick_two_sum(q1, q2);
    two_one_sum(Doubled { hi, lo }, q3)
}

/// Doubled + scalar.
#[inline]
pub fn two_one_sum<D: Real>(a: Doubled<D>, b: D) -> Doubled<D> {
    let (s1, s2) = two_sum(a.hi, b);
    let s2 = s2 + a.lo;
    let (hi, lo) = quick_two_sum(s1, s2);
    Doubled { hi, lo }
}

/// Doubled - scalar.
#[inline]
pub fn two_one_diff<D: Real>(a: Doubled<D>, b: D) -> Doubled<D> {
    let (s1, s2) = two_diff(a.hi, b);
    let s2 = s2 + a.lo;
    let (hi, lo) = quick_two_sum(s1, s2);
    Doubled { hi, lo }
}

/// Doubled * scalar.
#[inline]
pub fn two_one_prod<D: Real>(a: Doubled<D>, b: D, splitter: D) -> Doubled<D> {
    let (p1, p2) = two_prod(a.hi, b, splitter);
    let p2 = p2 + a.lo * b;
    let (hi, lo) = quick_two_sum(p1, p2);
    Doubled { hi, lo }
}

/// Doubled / scalar.
#[inline]
pub fn two_one_div<D: Real>(a: Doubled<D>, b: D, splitter: D) -> Doubled<D> {
    let q1 = a.hi / b;
    let (p1, p2) = two_prod(q1, b, splitter);
    let (s, e) = two_diff(a.hi, p1);
    let e = e + a.lo - p2;
    let q2 = (s + e) / b;
    let (hi, lo) = quick_two_sum(q1, q2);
    Doubled { hi, lo }
}
