//! Moist-Air Solver from Wet- and Dry-Bulb Readings
//!
//! ## Physics Background
//!
//! A whirling hygrometer gives two temperatures: the dry bulb reads the
//! air itself, the wet bulb reads a thermometer cooled by evaporation.
//! The drier the air, the faster the evaporation and the larger the
//! wet-bulb depression. Together with barometric pressure, these two
//! readings pin down the complete thermodynamic state of the air.
//!
//! The derivation chains several empirical correlations:
//!
//! ```text
//! 1. Saturation pressure at the wet bulb     Pws(t_wb)
//! 2. Saturated moisture content              r_o
//! 3. Enthalpies of air, water and vapor      H_a, H'_wl, H'_w
//! 4. Energy balance -> actual moisture       r
//! 5. Vapor pressure                          P_w
//! 6. Gas constant correction -> volume       v
//! 7. Density                                 w = (1+r)/v
//! 8. Enthalpy and sigma heat                 H, S
//! 9. Relative humidity                       phi = 100 P_w / Pws(t_db)
//! 10. Dew point by inverting step 1
//! ```
//!
//! Each step feeds the next; the order is part of the method and must
//! not be rearranged. Coefficients follow the Mine Ventilation Society
//! correlations, so outputs agree with the hygrometer tables used in
//! South African mine ventilation practice.
//!
//! ## Preconditions
//!
//! [`solve`] is faithful to the field formulas: it does not validate.
//! Pressure must exceed the enhancement-corrected saturation pressure at
//! the wet bulb, or the moisture-content denominator crosses zero and
//! non-finite values propagate through the remaining steps. The wet bulb
//! must not read above the dry bulb. [`solve_checked`] enforces both.

use crate::{
    constants::{
        correlations::{SAT_PRESSURE_EXP_COEFF, SAT_PRESSURE_SCALE_KPA, SAT_PRESSURE_TEMP_OFFSET_C},
        physics::{
            CELSIUS_TO_KELVIN, DRY_AIR_MOLAR_MASS_KG_PER_KMOL, DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K,
            ENHANCEMENT_FACTOR, MOLAR_MASS_RATIO, UNIVERSAL_GAS_CONSTANT_KJ_PER_KMOL_K,
        },
    },
    errors::{DomainError, DomainResult},
};

use core::fmt;

/// Complete thermodynamic state of moist air
///
/// Produced by [`solve`]. The first three fields are what ventilation
/// surveys report; the rest fall out of the same derivation and are
/// exposed because heat-load and airflow calculations need them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoistAirState {
    /// Relative humidity (%)
    pub relative_humidity_pct: f64,

    /// Dew-point temperature (°C)
    pub dew_point_c: f64,

    /// Humidity ratio: mass of water vapor per mass of dry air (kg/kg)
    pub humidity_ratio_kg_per_kg: f64,

    /// Partial pressure of water vapor (kPa)
    pub vapor_pressure_kpa: f64,

    /// Specific volume of the mixture (m³/kg)
    pub specific_volume_m3_per_kg: f64,

    /// Density of the mixture (kg/m³)
    pub density_kg_per_m3: f64,

    /// Specific enthalpy of the mixture (kJ/kg dry air)
    pub enthalpy_kj_per_kg: f64,

    /// Sigma heat: enthalpy less the sensible heat of the liquid-water
    /// content at the wet-bulb temperature (kJ/kg dry air)
    pub sigma_heat_kj_per_kg: f64,
}

impl fmt::Display for MoistAirState {
    /// Survey-report form: the three headline quantities, labeled with
    /// units, humidity ratio to four decimals and the rest to two.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Absolute humidity {:.4} kg/kg", self.humidity_ratio_kg_per_kg)?;
        writeln!(f, "Relative humidity {:.2} percent", self.relative_humidity_pct)?;
        write!(f, "Dew point temperature {:.2} degrees Celsius", self.dew_point_c)
    }
}

/// Saturation vapor pressure over water (kPa)
///
/// The Mine Ventilation Society form of the Magnus-Tetens correlation,
/// used by the solver at both bulb temperatures and inverted for the
/// dew point. Distinct from the Lawrence coefficient set in
/// [`crate::dew_point`]; the two fits are never mixed.
pub fn saturation_vapor_pressure_kpa(t_c: f64) -> f64 {
    SAT_PRESSURE_SCALE_KPA
        * libm::exp(SAT_PRESSURE_EXP_COEFF * t_c / (SAT_PRESSURE_TEMP_OFFSET_C + t_c))
}

/// Enthalpy of liquid water (kJ/kg)
///
/// Cubic fit over the meteorological range, Mine Ventilation Society
/// coefficients.
fn liquid_water_enthalpy_kj_per_kg(t_c: f64) -> f64 {
    6.3e-6 * t_c * t_c * t_c - 7.27e-4 * t_c * t_c + 4.2058 * t_c + 0.03
}

/// Enthalpy of water vapor (kJ/kg)
///
/// Cubic fit; the 2500.83 intercept is the latent heat of vaporization
/// at 0 °C.
fn water_vapor_enthalpy_kj_per_kg(t_c: f64) -> f64 {
    -6.62e-6 * t_c * t_c * t_c - 1.94e-4 * t_c * t_c + 1.8375 * t_c + 2500.83
}

/// Derive the moist-air state from hygrometer readings
///
/// * `t_db_c` - dry-bulb temperature (°C)
/// * `t_wb_c` - wet-bulb temperature (°C)
/// * `pressure_kpa` - barometric pressure (kPa)
///
/// Permissive tier: no validation is performed. If the pressure does not
/// exceed the enhancement-corrected saturation pressure at the wet bulb,
/// the result degenerates to non-finite values (a warning is logged when
/// the `log` feature is active). Use [`solve_checked`] to fail instead.
pub fn solve(t_db_c: f64, t_wb_c: f64, pressure_kpa: f64) -> MoistAirState {
    let p_ws_wb = saturation_vapor_pressure_kpa(t_wb_c);

    let threshold_kpa = ENHANCEMENT_FACTOR * p_ws_wb;
    if pressure_kpa <= threshold_kpa {
        log_warn!(
            "Moist-air solve: pressure {} kPa at or below saturation threshold {} kPa, results will be non-finite",
            pressure_kpa, threshold_kpa
        );
    }

    // Moisture content of saturated air at the wet-bulb temperature.
    let r_o = MOLAR_MASS_RATIO * ENHANCEMENT_FACTOR * p_ws_wb
        / (pressure_kpa - ENHANCEMENT_FACTOR * p_ws_wb);

    // Enthalpy terms for dry air, liquid water and water vapor.
    let h_ao = DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K * t_wb_c;
    let h_ai = DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K * t_db_c;
    let h_wl = liquid_water_enthalpy_kj_per_kg(t_wb_c);
    let h_wo = water_vapor_enthalpy_kj_per_kg(t_wb_c);
    let h_wi = water_vapor_enthalpy_kj_per_kg(t_db_c);

    // Actual moisture content from the energy balance between the
    // saturated and actual states.
    let r = (r_o * (h_wo - h_wl) - (h_ai - h_ao)) / (h_wi - h_wl);

    // Vapor pressure.
    let p_w = r * pressure_kpa / (ENHANCEMENT_FACTOR * (MOLAR_MASS_RATIO + r));

    // Specific gas constant for moist air, corrected for pressure and
    // temperature, then specific volume from the ideal-gas relation.
    let r_ma = (UNIVERSAL_GAS_CONSTANT_KJ_PER_KMOL_K / DRY_AIR_MOLAR_MASS_KG_PER_KMOL)
        * (1.0
            - ((5.307e-6 * pressure_kpa + 9.49e-6)
                - (8.115e-8 * pressure_kpa + 2.794e-6) * t_db_c));
    let t_k = CELSIUS_TO_KELVIN + t_db_c;
    let v = r_ma * t_k / (pressure_kpa - p_w);

    let density = (1.0 + r) / v;

    let enthalpy = h_ai + r * h_wi;
    let sigma_heat = enthalpy - r * h_wl;

    // Relative humidity against saturation at the dry-bulb temperature.
    let p_ws_db = saturation_vapor_pressure_kpa(t_db_c);
    let phi = 100.0 * p_w / p_ws_db;

    // Dew point by inverting the saturation correlation.
    let x = libm::log(p_w / SAT_PRESSURE_SCALE_KPA);
    let t_dp = SAT_PRESSURE_TEMP_OFFSET_C * x / (SAT_PRESSURE_EXP_COEFF - x);

    MoistAirState {
        relative_humidity_pct: phi,
        dew_point_c: t_dp,
        humidity_ratio_kg_per_kg: r,
        vapor_pressure_kpa: p_w,
        specific_volume_m3_per_kg: v,
        density_kg_per_m3: density,
        enthalpy_kj_per_kg: enthalpy,
        sigma_heat_kj_per_kg: sigma_heat,
    }
}

/// Strict variant of [`solve`]
///
/// Rejects non-finite inputs, a wet bulb reading above the dry bulb, and
/// pressures at or below the wet-bulb saturation threshold. On success
/// the result is identical to the permissive tier.
pub fn solve_checked(t_db_c: f64, t_wb_c: f64, pressure_kpa: f64) -> DomainResult<MoistAirState> {
    if !t_db_c.is_finite() || !t_wb_c.is_finite() || !pressure_kpa.is_finite() {
        return Err(DomainError::InvalidValue);
    }

    if t_wb_c > t_db_c {
        return Err(DomainError::CrossValidationFailed {
            reason: "wet-bulb temperature exceeds dry-bulb temperature",
        });
    }

    let threshold_kpa = ENHANCEMENT_FACTOR * saturation_vapor_pressure_kpa(t_wb_c);
    if pressure_kpa <= threshold_kpa {
        return Err(DomainError::PressureBelowSaturation {
            pressure_kpa,
            threshold_kpa,
        });
    }

    Ok(solve(t_db_c, t_wb_c, pressure_kpa))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_30c_dry_20c_wet() {
        // Hand-computed through the ten-step derivation at standard
        // pressure; doubles as the regression baseline.
        let state = solve(30.0, 20.0, 101.325);

        assert!((state.relative_humidity_pct - 39.78012143903961).abs() < 1e-9);
        assert!((state.dew_point_c - 14.84034634928828).abs() < 1e-9);
        assert!((state.humidity_ratio_kg_per_kg - 0.010582456736512863).abs() < 1e-12);
        assert!((state.vapor_pressure_kpa - 1.6870674073587912).abs() < 1e-9);
        assert!((state.specific_volume_m3_per_kg - 0.8731181838027128).abs() < 1e-9);
        assert!((state.density_kg_per_m3 - 1.1574406254318272).abs() < 1e-9);
        assert!((state.enthalpy_kj_per_kg - 57.19454400271045).abs() < 1e-9);
        assert!((state.sigma_heat_kj_per_kg - 56.3066166207593).abs() < 1e-9);
    }

    #[test]
    fn worked_example_15c_dry_10c_wet() {
        let state = solve(15.0, 10.0, 101.325);

        assert!((state.relative_humidity_pct - 52.92343496795698).abs() < 1e-9);
        assert!((state.dew_point_c - 5.488825877593943).abs() < 1e-9);
        assert!((state.humidity_ratio_kg_per_kg - 0.005614054268529809).abs() < 1e-12);
    }

    #[test]
    fn saturated_air_reads_100_percent() {
        // Equal bulb readings mean no evaporative cooling: the air is
        // saturated, so RH is 100% and the dew point sits at the bulbs.
        let state = solve(20.0, 20.0, 101.325);

        assert!((state.relative_humidity_pct - 100.0).abs() < 1e-9);
        assert!((state.dew_point_c - 20.0).abs() < 1e-9);
    }

    #[test]
    fn saturation_correlation_at_20c() {
        // 2.337 kPa from hygrometer tables
        let p_ws = saturation_vapor_pressure_kpa(20.0);
        assert!((p_ws - 2.3371328027197213).abs() < 1e-12);
    }

    #[test]
    fn low_pressure_propagates_non_finite() {
        // Pressure below the wet-bulb saturation pressure is unphysical;
        // the permissive tier computes anyway and the sign flip poisons
        // the downstream steps.
        let state = solve(30.0, 20.0, 1.0);
        assert!(
            !state.relative_humidity_pct.is_finite()
                || state.relative_humidity_pct < 0.0
                || state.humidity_ratio_kg_per_kg < 0.0
        );
    }

    #[test]
    fn checked_rejects_low_pressure() {
        let result = solve_checked(30.0, 20.0, 1.0);
        assert!(matches!(
            result,
            Err(DomainError::PressureBelowSaturation { .. })
        ));
    }

    #[test]
    fn checked_rejects_inverted_bulbs() {
        let result = solve_checked(20.0, 25.0, 101.325);
        assert!(matches!(
            result,
            Err(DomainError::CrossValidationFailed { .. })
        ));
    }

    #[test]
    fn checked_rejects_nan() {
        assert_eq!(
            solve_checked(f64::NAN, 20.0, 101.325),
            Err(DomainError::InvalidValue)
        );
        assert_eq!(
            solve_checked(30.0, 20.0, f64::INFINITY),
            Err(DomainError::InvalidValue)
        );
    }

    #[test]
    fn checked_matches_permissive_on_valid_input() {
        let checked = solve_checked(30.0, 20.0, 101.325).unwrap();
        let permissive = solve(30.0, 20.0, 101.325);
        assert_eq!(checked, permissive);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_matches_survey_report_format() {
        let state = solve(30.0, 20.0, 101.325);
        let report = std::format!("{state}");
        assert_eq!(
            report,
            "Absolute humidity 0.0106 kg/kg\n\
             Relative humidity 39.78 percent\n\
             Dew point temperature 14.84 degrees Celsius"
        );
    }
}
