use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::compound::{
    two_one_diff, two_one_div, two_one_prod, two_one_sum, two_two_diff, two_two_div,
    two_two_prod, two_two_sqr, two_two_sum,
};
use crate::real::Real;

/// A number stored as the unevaluated sum `hi + lo` of two `D` values,
/// carrying roughly twice the precision of `D`.
///
/// Invariant after every arithmetic operation: `lo` is the rounding error
/// `hi` could not absorb, so `|lo| <= ulp(hi) / 2`.
///
/// `D` can itself be a `Doubled<_>`: [`QuadDouble`] and [`OctDouble`] are
/// built this way with no extra code. Products and quotients read the split
/// constant from [`Real::split`] on `D`.
///
/// Reference: Hida, Li, Bailey — "Library for Double-Double and Quad-Double
/// Arithmetic" (2001).
#[derive(Debug, Clone, Copy)]
pub struct Doubled<D> {
    pub hi: D,
    pub lo: D,
}

/// ~31 significant decimal digits.
pub type DoubleDouble = Doubled<f64>;

/// A double-double of double-doubles: 212 mantissa bits, though products and
/// quotients stay near double-double accuracy (see [`Doubled::make_split`]).
pub type QuadDouble = Doubled<DoubleDouble>;

/// Eight `f64` components.
pub type OctDouble = Doubled<QuadDouble>;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<D: Real> Doubled<D> {
    /// Raw pair; the caller is responsible for it being normalized.
    #[inline]
    pub fn new(hi: D, lo: D) -> Self {
        Self { hi, lo }
    }

    /// Split constant for the next level up, computed in this type's
    /// arithmetic as `s*s - s - s + two` with `s = D::split()`.
    ///
    /// From `s = 2^k + 1` this yields `2^(2k) + 1` exactly, so a
    /// `Doubled<Doubled<D>>` can split its `Doubled<D>` components.
    ///
    /// The result is one bit wider than `2^(p/2) + 1`: for `D = f64` it is
    /// `2^54 + 1`, whose high halves span up to 54 bits. Together with the
    /// dropped `lo*lo` term, this caps products and quotients at quad and oct
    /// level near double-double accuracy (~2e-32 relative) for general
    /// operands. Exactly representable results, such as integer ratios, still
    /// come out at full precision.
    pub fn make_split(two: D) -> Self {
        let s = Self::from(D::split());
        s * s - s - s + Self::from(two)
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        let zero = D::zero();
        self.hi > zero || (self.hi == zero && self.lo > zero)
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        let zero = D::zero();
        self.hi < zero || (self.hi == zero && self.lo < zero)
    }

    /// `self * self`, cheaper than the general product.
    #[inline]
    pub fn square(self) -> Self {
        two_two_sqr(self, D::split())
    }

    #[inline]
    pub fn add_scalar(self, rhs: D) -> Self {
        two_one_sum(self, rhs)
    }

    #[inline]
    pub fn sub_scalar(self, rhs: D) -> Self {
        two_one_diff(self, rhs)
    }

    #[inline]
    pub fn mul_scalar(self, rhs: D) -> Self {
        two_one_prod(self, rhs, D::split())
    }

    #[inline]
    pub fn div_scalar(self, rhs: D) -> Self {
        two_one_div(self, rhs, D::split())
    }
}

impl<D: Real> From<D> for Doubled<D> {
    #[inline]
    fn from(val: D) -> Self {
        Self {
            hi: val,
            lo: D::zero(),
        }
    }
}

/// Zero. There is no uninitialized state to expose.
impl<D: Real> Default for Doubled<D> {
    #[inline]
    fn default() -> Self {
        Self::from(D::zero())
    }
}

// ---------------------------------------------------------------------------
// Recursion: a doubled type is itself a valid base
// ---------------------------------------------------------------------------

impl<D: Real> Real for Doubled<D> {
    const MANTISSA_BITS: u32 = 2 * D::MANTISSA_BITS;

    #[inline]
    fn zero() -> Self {
        Self::from(D::zero())
    }

    #[inline]
    fn one() -> Self {
        Self::from(D::one())
    }

    /// Recomputed per call: one product, two differences and a sum at `D`'s
    /// level, recursively.
    #[inline]
    fn split() -> Self {
        Self::make_split(D::one() + D::one())
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::from(D::from_f64(v))
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.hi.to_f64() + self.lo.to_f64()
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

impl<D: Real> Add for Doubled<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        two_two_sum(self, rhs)
    }
}

impl<D: Real> Sub for Doubled<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        two_two_diff(self, rhs)
    }
}

impl<D: Real> Mul for Doubled<D> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        two_two_prod(self, rhs, D::split())
    }
}

impl<D: Real> Div for Doubled<D> {
    type Output = Self;

    /// Dividing by a zero-valued pair yields whatever `D` produces (inf/NaN).
    #[inline]
    fn div(self, rhs: Self) -> Self {
        two_two_div(self, rhs, D::split())
    }
}

impl<D: Real> Neg for Doubled<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl<D: Real> AddAssign for Doubled<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<D: Real> SubAssign for Doubled<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<D: Real> MulAssign for Doubled<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<D: Real> DivAssign for Doubled<D> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

impl<D: Real> PartialEq for Doubled<D> {
    fn eq(&self, other: &Self) -> bool {
        self.hi == other.hi && self.lo == other.lo
    }
}

/// Lexicographic on `(hi, lo)`, which matches numeric order for normalized
/// pairs.
impl<D: Real> PartialOrd for Doubled<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi) {
            Some(Ordering::Equal) => self.lo.partial_cmp(&other.lo),
            ord => ord,
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.hi < other.hi || (self.hi == other.hi && self.lo < other.lo)
    }

    fn le(&self, other: &Self) -> bool {
        self.hi < other.hi || (self.hi == other.hi && self.lo <= other.lo)
    }

    fn gt(&self, other: &Self) -> bool {
        other < self
    }

    fn ge(&self, other: &Self) -> bool {
        other <= self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
