use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use serde::Serialize;
use tracing::{debug, info, warn};

use doubled_core::{split_constant, DoubleDouble, OctDouble, PrecisionInfo, QuadDouble, Real};

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Results of exercising one precision level, downcast to `f64` for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelReport {
    pub name: &'static str,
    pub precision: PrecisionInfo,
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    pub quotient: f64,
    /// `(a / b) * b - a`, relative to `a`.
    pub round_trip_residual: f64,
    /// In-place `+= b, -= b, *= b, /= b` should land back on `a`.
    pub compound_matches: bool,
    pub comparisons: Comparisons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparisons {
    pub eq: bool,
    pub ne: bool,
    pub lt: bool,
    pub le: bool,
    pub gt: bool,
    pub ge: bool,
}

/// Run every operator once at `T`'s precision.
pub fn exercise<T>(name: &'static str, lhs: f64, rhs: f64) -> LevelReport
where
    T: Real + AddAssign + SubAssign + MulAssign + DivAssign,
{
    let a = T::from_f64(lhs);
    let b = T::from_f64(rhs);

    let mut x = a;
    x += b;
    x -= b;
    x *= b;
    x /= b;
    let compound_err = (x - a).to_f64().abs();

    let quotient = a / b;
    let residual = quotient * b - a;
    let round_trip_residual = if lhs == 0.0 {
        residual.to_f64().abs()
    } else {
        (residual.to_f64() / lhs).abs()
    };

    let report = LevelReport {
        name,
        precision: PrecisionInfo::of::<T>(),
        sum: (a + b).to_f64(),
        difference: (a - b).to_f64(),
        product: (a * b).to_f64(),
        quotient: quotient.to_f64(),
        round_trip_residual,
        compound_matches: compound_err <= lhs.abs() * 1e-29,
        comparisons: Comparisons {
            eq: a == b,
            ne: a != b,
            lt: a < b,
            le: a <= b,
            gt: a > b,
            ge: a >= b,
        },
    };

    debug!(label = name, ?report, "Exercised level");
    if !report.compound_matches {
        warn!(label = name, compound_err, "In-place operators drifted from the operand");
    }
    report
}

/// Check `T`'s split literal against the constant derived from its mantissa
/// width. Only primitive widths have a derivable constant.
pub fn verify_base_split<T: Real>() -> Result<f64, DemoError> {
    let derived = split_constant(T::MANTISSA_BITS)?;
    let literal = T::split().to_f64();
    if derived != literal {
        return Err(DemoError::SplitMismatch {
            bits: T::MANTISSA_BITS,
            derived,
            literal,
        });
    }
    debug!(bits = T::MANTISSA_BITS, split = derived, "Base split constant verified");
    Ok(derived)
}

/// Exercise `config.levels` doubled precisions, lowest first.
pub fn run(config: &DemoConfig) -> Result<Vec<LevelReport>, DemoError> {
    config.validate()?;
    verify_base_split::<f64>()?;

    let (lhs, rhs) = (config.lhs, config.rhs);
    let mut reports = Vec::with_capacity(config.levels as usize);
    reports.push(exercise::<DoubleDouble>("double-double", lhs, rhs));
    if config.levels >= 2 {
        reports.push(exercise::<QuadDouble>("quad-double", lhs, rhs));
    }
    if config.levels >= 3 {
        reports.push(exercise::<OctDouble>("oct-double", lhs, rhs));
    }

    for r in &reports {
        info!(
            label = r.name,
            digits = r.precision.decimal_digits,
            residual = r.round_trip_residual,
            "Level complete"
        );
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_every_level() {
        let reports = run(&DemoConfig::default()).unwrap();
        let names: Vec<_> = reports.iter().map(|r| r.name).collect();
        assert_eq!(names, ["double-double", "quad-double", "oct-double"]);
        assert!(reports.iter().all(|r| r.compound_matches));
    }

    #[test]
    fn level_count_is_respected() {
        let config = DemoConfig {
            levels: 1,
            ..DemoConfig::default()
        };
        assert_eq!(run(&config).unwrap().len(), 1);
    }

    #[test]
    fn results_agree_across_levels() {
        let reports = run(&DemoConfig::default()).unwrap();
        for r in &reports {
            assert_eq!(r.sum, 4.0);
            assert_eq!(r.difference, -2.0);
            assert_eq!(r.product, 3.0);
            assert!((r.quotient - 1.0 / 3.0).abs() < 1e-16);
        }
    }

    #[test]
    fn residual_shrinks_with_precision() {
        let reports = run(&DemoConfig {
            lhs: 2.0,
            rhs: 7.0,
            levels: 2,
        })
        .unwrap();
        assert!(reports[0].round_trip_residual < 1e-29);
        assert!(reports[1].round_trip_residual < 1e-44);
    }

    #[test]
    fn comparisons_are_consistent() {
        let r = exercise::<DoubleDouble>("double-double", 1.0, 3.0);
        assert_eq!(
            r.comparisons,
            Comparisons {
                eq: false,
                ne: true,
                lt: true,
                le: true,
                gt: false,
                ge: false,
            }
        );
        let r = exercise::<QuadDouble>("quad-double", 5.0, 5.0);
        assert!(r.comparisons.eq && r.comparisons.le && r.comparisons.ge);
        assert!(!r.comparisons.ne && !r.comparisons.lt && !r.comparisons.gt);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DemoConfig {
            levels: 9,
            ..DemoConfig::default()
        };
        assert!(matches!(run(&config), Err(DemoError::InvalidLevels(9))));
    }

    #[test]
    fn base_splits_match_their_widths() {
        assert_eq!(verify_base_split::<f64>().unwrap(), 134_217_729.0);
        assert_eq!(verify_base_split::<f32>().unwrap(), 4_097.0);
    }

    #[test]
    fn doubled_width_has_no_base_split() {
        assert!(matches!(
            verify_base_split::<DoubleDouble>(),
            Err(DemoError::Core(doubled_core::CoreError::InvalidMantissaBits(106)))
        ));
    }

    #[test]
    fn report_serializes() {
        let r = exercise::<DoubleDouble>("double-double", 1.0, 2.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["name"], "double-double");
        assert_eq!(json["precision"]["mantissa_bits"], 106);
        assert_eq!(json["comparisons"]["lt"], true);
    }
}
