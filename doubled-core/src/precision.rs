use serde::{Deserialize, Serialize};

use crate::real::Real;

/// Describes the precision a [`Real`] type carries.
///
/// Purely informational: nothing in the arithmetic reads it. Serializable so
/// drivers can report which level produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionInfo {
    /// Significant mantissa bits, summed over all components.
    pub mantissa_bits: u32,

    /// Decimal digits that survive a round trip: `floor(bits * log10(2))`.
    pub decimal_digits: u32,
}

impl PrecisionInfo {
    pub fn of<T: Real>() -> Self {
        Self::from_bits(T::MANTISSA_BITS)
    }

    pub fn from_bits(mantissa_bits: u32) -> Self {
        let decimal_digits = (mantissa_bits as f64 * std::f64::consts::LOG10_2).floor() as u32;
        Self {
            mantissa_bits,
            decimal_digits,
        }
    }

    /// Unit roundoff scale `2^(1 - bits)`, handy as a relative tolerance.
    ///
    /// Nominal: quad and oct products and quotients stay near double-double
    /// accuracy for general operands, see
    /// [`Doubled::make_split`](crate::Doubled::make_split). Underflows to
    /// zero past 1075 bits.
    pub fn epsilon(&self) -> f64 {
        let bits = i32::try_from(self.mantissa_bits).unwrap_or(i32::MAX);
        2f64.powi(1i32.saturating_sub(bits))
    }
}
