//! Dew Point from Temperature and Relative Humidity
//!
//! The Magnus formula approximates saturation vapor pressure as a single
//! exponential in temperature, which makes its dew-point inverse purely
//! algebraic: no iteration, no lookup. Coefficients follow Lawrence
//! (2005), fitted over −40 °C to 50 °C with stated accuracy of a few
//! tenths of a percent over liquid water.
//!
//! This coefficient set is deliberately separate from the hygrometer
//! correlation in [`crate::moist_air`] - same functional form, different
//! papers, different reference data. Mixing them produces dew points
//! that disagree with both sources.
//!
//! For quick field work at RH above 50% there is also the one-fifth
//! rule: the dew point drops about 1 °C for every 5% the relative
//! humidity falls below saturation.

use crate::{
    constants::{
        correlations::{MAGNUS_A, MAGNUS_B_C, MAGNUS_C_PA, PA_TO_HPA},
        limits::{LINEAR_DEW_POINT_RH_MIN_PCT, MAGNUS_TEMP_MAX_C, MAGNUS_TEMP_MIN_C, RH_MAX_PCT},
    },
    errors::{DomainError, DomainResult},
};

/// Saturation vapor pressure over liquid water (hPa)
///
/// Magnus formula, Lawrence 2005 coefficients. Validated for
/// −40 °C < T ≤ 50 °C; outside that the permissive tier evaluates
/// anyway (with a warning when the `log` feature is active) but the
/// published accuracy no longer applies.
pub fn saturation_pressure_hpa(t_c: f64) -> f64 {
    if t_c <= MAGNUS_TEMP_MIN_C || t_c > MAGNUS_TEMP_MAX_C {
        log_warn!(
            "Magnus saturation pressure: {} degC outside validated domain {}..{} degC",
            t_c, MAGNUS_TEMP_MIN_C, MAGNUS_TEMP_MAX_C
        );
    }

    PA_TO_HPA * MAGNUS_C_PA * libm::exp(MAGNUS_A * t_c / (MAGNUS_B_C + t_c))
}

/// Dew-point temperature (°C) by inverting the Magnus formula
///
/// * `t_c` - dry-bulb temperature (°C)
/// * `rh_pct` - relative humidity in percent
///
/// Precondition: RH must be positive (the logarithm is undefined at
/// zero). The permissive tier propagates non-finite values for RH ≤ 0
/// rather than failing; use [`dew_point_checked`] to reject such inputs.
pub fn dew_point_c(t_c: f64, rh_pct: f64) -> f64 {
    let gamma = libm::log(rh_pct / 100.0) + MAGNUS_A * t_c / (MAGNUS_B_C + t_c);
    MAGNUS_B_C * gamma / (MAGNUS_A - gamma)
}

/// Strict variant of [`dew_point_c`]
///
/// Rejects non-finite inputs, non-positive humidity, humidity above
/// saturation, and temperatures outside the validated Magnus domain.
pub fn dew_point_checked(t_c: f64, rh_pct: f64) -> DomainResult<f64> {
    if !t_c.is_finite() || !rh_pct.is_finite() {
        return Err(DomainError::InvalidValue);
    }

    if rh_pct <= 0.0 {
        return Err(DomainError::NonPositiveHumidity { value: rh_pct });
    }

    if rh_pct > RH_MAX_PCT {
        return Err(DomainError::OutOfRange {
            value: rh_pct,
            min: 0.0,
            max: RH_MAX_PCT,
        });
    }

    if t_c <= MAGNUS_TEMP_MIN_C || t_c > MAGNUS_TEMP_MAX_C {
        return Err(DomainError::OutOfRange {
            value: t_c,
            min: MAGNUS_TEMP_MIN_C,
            max: MAGNUS_TEMP_MAX_C,
        });
    }

    Ok(dew_point_c(t_c, rh_pct))
}

/// Strict variant of [`saturation_pressure_hpa`]
///
/// Rejects non-finite input and temperatures outside the validated
/// Magnus domain.
pub fn saturation_pressure_checked(t_c: f64) -> DomainResult<f64> {
    if !t_c.is_finite() {
        return Err(DomainError::InvalidValue);
    }

    if t_c <= MAGNUS_TEMP_MIN_C || t_c > MAGNUS_TEMP_MAX_C {
        return Err(DomainError::OutOfRange {
            value: t_c,
            min: MAGNUS_TEMP_MIN_C,
            max: MAGNUS_TEMP_MAX_C,
        });
    }

    Ok(saturation_pressure_hpa(t_c))
}

/// Linear dew-point approximation (°C)
///
/// The one-fifth rule: `T_d = T − (100 − RH)/5`. A rough estimate only,
/// valid for RH above 50%; callers choose it knowingly for speed or
/// mental arithmetic, not accuracy.
pub fn dew_point_linear_c(t_c: f64, rh_pct: f64) -> f64 {
    if rh_pct <= LINEAR_DEW_POINT_RH_MIN_PCT {
        log_warn!(
            "Linear dew point: RH {}% at or below {}%, approximation unreliable",
            rh_pct, LINEAR_DEW_POINT_RH_MIN_PCT
        );
    }

    t_c - (100.0 - rh_pct) / 5.0
}

/// Strict variant of [`dew_point_linear_c`]
///
/// Rejects non-finite inputs and relative humidities at or below 50%,
/// where the one-fifth rule is unreliable.
pub fn dew_point_linear_checked(t_c: f64, rh_pct: f64) -> DomainResult<f64> {
    if !t_c.is_finite() || !rh_pct.is_finite() {
        return Err(DomainError::InvalidValue);
    }

    if rh_pct <= LINEAR_DEW_POINT_RH_MIN_PCT || rh_pct > RH_MAX_PCT {
        return Err(DomainError::OutOfRange {
            value: rh_pct,
            min: LINEAR_DEW_POINT_RH_MIN_PCT,
            max: RH_MAX_PCT,
        });
    }

    Ok(dew_point_linear_c(t_c, rh_pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation_pressure_at_freezing() {
        // exp(0) = 1, so the value is the C1 coefficient in hPa
        assert!((saturation_pressure_hpa(0.0) - 6.1094).abs() < 1e-12);
    }

    #[test]
    fn saturation_pressure_at_20c() {
        assert!((saturation_pressure_hpa(20.0) - 23.33440623099358).abs() < 1e-12);
    }

    #[test]
    fn saturated_air_dews_at_air_temperature() {
        // ln(1) = 0 collapses the inverse to the identity
        for t in [-30.0, -10.0, 0.0, 10.0, 25.0, 50.0] {
            let t_d = dew_point_c(t, 100.0);
            assert!((t_d - t).abs() < 1e-9, "T {t}: dew point {t_d}");
        }
    }

    #[test]
    fn warm_room_dew_point() {
        assert!((dew_point_c(25.0, 60.0) - 16.697663521212892).abs() < 1e-12);
    }

    #[test]
    fn dew_point_monotone_in_humidity() {
        let mut prev = dew_point_c(20.0, 1.0);
        for rh in 2..=100 {
            let t_d = dew_point_c(20.0, rh as f64);
            assert!(t_d >= prev, "RH {rh}%: dew point decreased");
            prev = t_d;
        }
    }

    #[test]
    fn zero_humidity_propagates_non_finite() {
        // ln(0) = -inf; the permissive tier lets it through
        assert!(!dew_point_c(20.0, 0.0).is_finite());
    }

    #[test]
    fn checked_rejects_non_positive_humidity() {
        assert!(matches!(
            dew_point_checked(20.0, 0.0),
            Err(DomainError::NonPositiveHumidity { .. })
        ));
        assert!(matches!(
            dew_point_checked(20.0, -5.0),
            Err(DomainError::NonPositiveHumidity { .. })
        ));
    }

    #[test]
    fn checked_rejects_magnus_domain_violations() {
        assert!(matches!(
            dew_point_checked(-60.0, 50.0),
            Err(DomainError::OutOfRange { .. })
        ));
        assert!(matches!(
            saturation_pressure_checked(55.0),
            Err(DomainError::OutOfRange { .. })
        ));
        assert!(saturation_pressure_checked(50.0).is_ok());
        assert!(saturation_pressure_checked(-39.9).is_ok());
    }

    #[test]
    fn one_fifth_rule_exact_arithmetic() {
        assert_eq!(dew_point_linear_c(20.0, 80.0), 16.0);
    }

    #[test]
    fn one_fifth_rule_tracks_magnus_at_high_humidity() {
        // Lawrence 2005 quotes ~1 degC agreement for RH > 50%
        for rh in [60.0, 70.0, 80.0, 90.0, 100.0] {
            let linear = dew_point_linear_c(20.0, rh);
            let magnus = dew_point_c(20.0, rh);
            assert!(
                (linear - magnus).abs() < 1.0,
                "RH {rh}%: linear {linear} vs Magnus {magnus}"
            );
        }
    }

    #[test]
    fn checked_linear_rejects_dry_air() {
        assert!(matches!(
            dew_point_linear_checked(20.0, 40.0),
            Err(DomainError::OutOfRange { .. })
        ));
        assert!(dew_point_linear_checked(20.0, 80.0).is_ok());
    }
}
