//! Empirical Correlation Coefficients
//!
//! Three independent fits are used in this crate. They overlap in what
//! they describe but come from different papers with different reference
//! data, so their coefficients are kept separate and are never mixed:
//!
//! - The **hygrometer saturation correlation** used by the moist-air
//!   solver (Mine Ventilation Society form of Magnus-Tetens, kPa)
//! - The **Magnus formula** for saturation vapor pressure and its
//!   algebraic dew-point inverse (Lawrence 2005, hPa)
//! - The **Stull wet-bulb approximation** (Stull 2011)

// ===== HYGROMETER SATURATION CORRELATION (kPa) =====
//
// Pws(t) = 0.6105 * exp(17.27*t / (237.3 + t))
//
// Source: Environmental Engineering in South African Mines, 1989

/// Scale coefficient of the hygrometer saturation correlation (kPa).
pub const SAT_PRESSURE_SCALE_KPA: f64 = 0.6105;

/// Exponent coefficient of the hygrometer saturation correlation.
pub const SAT_PRESSURE_EXP_COEFF: f64 = 17.27;

/// Temperature offset of the hygrometer saturation correlation (°C).
pub const SAT_PRESSURE_TEMP_OFFSET_C: f64 = 237.3;

// ===== MAGNUS FORMULA (hPa) =====
//
// e_s(T) = 0.01 * C1 * exp(A1*T / (B1 + T))
//
// Source: Lawrence, M. G., 2005: The relationship between relative
// humidity and the dewpoint temperature in moist air.
// Bull. Amer. Meteor. Soc., 86, 225-233

/// Magnus exponent coefficient A₁ (dimensionless).
pub const MAGNUS_A: f64 = 17.625;

/// Magnus temperature offset B₁ (°C).
pub const MAGNUS_B_C: f64 = 243.04;

/// Magnus pressure scale C₁ (Pa).
pub const MAGNUS_C_PA: f64 = 610.94;

/// Conversion factor from pascals to hectopascals.
pub const PA_TO_HPA: f64 = 0.01;

// ===== STULL WET-BULB APPROXIMATION =====
//
// Source: Stull, R., 2011: Wet-bulb temperature from relative humidity
// and air temperature. J. Appl. Meteor. Climatol., 50(11), 2267-2269
//
// The combination of arctangent and square-root terms is part of the
// published fit; reordering the terms shifts results at the margins.

/// Scale inside the leading arctangent term.
pub const STULL_SQRT_SCALE: f64 = 0.151977;

/// Humidity offset inside the leading square root (%).
pub const STULL_RH_OFFSET: f64 = 8.313659;

/// Scale of the RH^(3/2) correction term.
pub const STULL_POW_SCALE: f64 = 0.00391838;

/// Scale inside the RH^(3/2) arctangent.
pub const STULL_ATAN_SCALE: f64 = 0.023101;

/// Humidity shift of the subtracted arctangent term (%).
pub const STULL_RH_SHIFT: f64 = 1.676331;

/// Constant offset of the fit (°C).
pub const STULL_OFFSET_C: f64 = 4.686035;
