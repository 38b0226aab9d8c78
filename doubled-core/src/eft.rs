//! Error-free transformations.
//!
//! Each function returns `(r, e)` where `r` is the rounded result and
//! `r + e` equals the exact mathematical result. Exactness relies on
//! round-to-nearest with every step evaluated as written: no `mul_add`,
//! no reassociation. Rust guarantees both for primitive floats, so keep
//! these bodies free of FMA intrinsics.
//!
//! Reference: Hida, Li, Bailey — "Library for Double-Double and Quad-Double
//! Arithmetic" (2001); Dekker (1971) for the split-based product.

use crate::real::Real;

/// Fast TwoSum. Assumes `|a| >= |b|`.
#[inline]
pub fn quick_two_sum<D: Real>(a: D, b: D) -> (D, D) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// Fast TwoDiff. Assumes `|a| >= |b|`.
#[inline]
pub fn quick_two_diff<D: Real>(a: D, b: D) -> (D, D) {
    let s = a - b;
    let e = (a - s) - b;
    (s, e)
}

/// Knuth's TwoSum: no ordering precondition.
#[inline]
pub fn two_sum<D: Real>(a: D, b: D) -> (D, D) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Knuth's TwoSum for `a - b`.
#[inline]
pub fn two_diff<D: Real>(a: D, b: D) -> (D, D) {
    let s = a - b;
    let bb = s - a;
    let e = (a - (s - bb)) - (b + bb);
    (s, e)
}

/// Veltkamp split of `a` into `(hi, lo)` with `hi + lo == a`, `hi` holding
/// the upper half of the mantissa.
#[inline]
pub fn split<D: Real>(a: D, splitter: D) -> (D, D) {
    let t = splitter * a;
    let hi = t - (t - a);
    let lo = a - hi;
    (hi, lo)
}

/// Dekker's TwoProd: `p + e == a * b`.
#[inline]
pub fn two_prod<D: Real>(a: D, b: D, splitter: D) -> (D, D) {
    let p = a * b;
    let (a_hi, a_lo) = split(a, splitter);
    let (b_hi, b_lo) = split(b, splitter);
    let e = a_hi * b_hi - p + a_hi * b_lo + a_lo * b_hi + a_lo * b_lo;
    (p, e)
}

/// TwoProd specialised to `a * a`; splits once.
#[inline]
pub fn two_sqr<D: Real>(a: D, splitter: D) -> (D, D) {
    let p = a * a;
    let (hi, lo) = split(a, splitter);
    let t = hi * lo;
    let e = hi * hi - p + t + t + lo * lo;
    (p, e)
}
