use std::ops::{Add, Div, Mul, Neg, Sub};

use tracing::debug;

use crate::error::CoreError;

/// Arithmetic capability required of a base type for [`Doubled`](crate::Doubled).
///
/// Implemented for `f32`, `f64`, and for `Doubled<D>` itself whenever `D`
/// implements it, which is what lets precision be doubled repeatedly.
///
/// Implementors must round to nearest on every operation and must not fuse
/// or reassociate; the error-free transformations in [`eft`](crate::eft)
/// depend on it.
pub trait Real:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Number of significant mantissa bits, including the implicit one.
    const MANTISSA_BITS: u32;

    fn zero() -> Self;

    fn one() -> Self;

    /// Constant that splits a value into two non-overlapping halves.
    ///
    /// Must be `2^ceil(p/2) + 1` for a primitive type with `p` mantissa
    /// bits. Doubled types derive theirs with [`Doubled::make_split`](crate::Doubled::make_split).
    ///
    /// Not cached. Every product or quotient on a `Doubled<Self>` calls this
    /// once, so for doubled types the derivation is repeated per operation
    /// and its cost compounds with nesting depth. Hoist the value out of hot
    /// loops when calling [`eft`](crate::eft) or [`compound`](crate::compound)
    /// directly.
    fn split() -> Self;

    /// Lift an `f64` literal into this type. Lossy for `f32`.
    fn from_f64(v: f64) -> Self;

    /// Downcast to a single `f64` (loses the low-order bits).
    fn to_f64(self) -> f64;
}

impl Real for f64 {
    const MANTISSA_BITS: u32 = f64::MANTISSA_DIGITS;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    /// `2^27 + 1`
    #[inline]
    fn split() -> Self {
        134_217_729.0
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    const MANTISSA_BITS: u32 = f32::MANTISSA_DIGITS;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    /// `2^12 + 1`
    #[inline]
    fn split() -> Self {
        4_097.0
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Split constant `2^ceil(bits/2) + 1` for a primitive format with `bits`
/// significant mantissa bits.
///
/// Limited to widths whose constant is exactly representable in `f64`.
pub fn split_constant(bits: u32) -> crate::Result<f64> {
    if !(2..=104).contains(&bits) {
        debug!(bits, "rejecting mantissa width for split constant");
        return Err(CoreError::InvalidMantissaBits(bits));
    }
    let half = bits.div_ceil(2);
    let split = ((1u64 << half) + 1) as f64;
    debug!(bits, half, split, "derived split constant");
    Ok(split)
}
