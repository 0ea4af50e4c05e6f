//! Wet-Bulb Temperature from Relative Humidity
//!
//! Inverts the usual survey direction: given dry-bulb temperature and
//! relative humidity (from a capacitive sensor, say), estimate what a
//! whirling hygrometer's wet bulb would have read.
//!
//! Uses the Stull (2011) fit, an empirical combination of arctangent and
//! square-root terms regressed against full psychrometric solutions at
//! standard sea-level pressure. Documented accurate to about ±0.3 °C for
//! 5% < RH < 99%; the fit degrades outside that band and carries no
//! pressure dependence at all. Treat the formula as given - the term
//! structure is part of the published fit and is not re-derivable from
//! first principles.

use crate::{
    constants::{
        correlations::{
            STULL_ATAN_SCALE, STULL_OFFSET_C, STULL_POW_SCALE, STULL_RH_OFFSET, STULL_RH_SHIFT,
            STULL_SQRT_SCALE,
        },
        limits::{STULL_RH_MIN_PCT, STULL_RH_MAX_PCT},
    },
    errors::{DomainError, DomainResult},
};

/// Estimate the wet-bulb temperature (°C)
///
/// * `t_db_c` - dry-bulb temperature (°C)
/// * `rh_pct` - relative humidity in percent, not as a fraction
///
/// Permissive tier: outside the validated 5-99% RH band the formula is
/// still evaluated (with a warning when the `log` feature is active),
/// but the published accuracy no longer holds.
pub fn estimate_wet_bulb_c(t_db_c: f64, rh_pct: f64) -> f64 {
    if !(STULL_RH_MIN_PCT..=STULL_RH_MAX_PCT).contains(&rh_pct) {
        log_warn!(
            "Wet-bulb estimate: RH {}% outside validated band {}..{}%",
            rh_pct, STULL_RH_MIN_PCT, STULL_RH_MAX_PCT
        );
    }

    t_db_c * libm::atan(STULL_SQRT_SCALE * libm::sqrt(rh_pct + STULL_RH_OFFSET))
        + STULL_POW_SCALE * libm::sqrt(rh_pct * rh_pct * rh_pct) * libm::atan(STULL_ATAN_SCALE * rh_pct)
        - libm::atan(rh_pct - STULL_RH_SHIFT)
        + libm::atan(t_db_c + rh_pct)
        - STULL_OFFSET_C
}

/// Strict variant of [`estimate_wet_bulb_c`]
///
/// Rejects non-finite inputs and relative humidities outside the
/// validated 5-99% band.
pub fn estimate_wet_bulb_checked(t_db_c: f64, rh_pct: f64) -> DomainResult<f64> {
    if !t_db_c.is_finite() || !rh_pct.is_finite() {
        return Err(DomainError::InvalidValue);
    }

    if !(STULL_RH_MIN_PCT..=STULL_RH_MAX_PCT).contains(&rh_pct) {
        return Err(DomainError::OutOfRange {
            value: rh_pct,
            min: STULL_RH_MIN_PCT,
            max: STULL_RH_MAX_PCT,
        });
    }

    Ok(estimate_wet_bulb_c(t_db_c, rh_pct))
}
