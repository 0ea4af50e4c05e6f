//! Validated Accuracy Domains
//!
//! Each empirical correlation in this crate was fitted over a bounded
//! input range. Outside that range the formulas still evaluate, but the
//! published error bounds no longer apply. The permissive API warns when
//! a domain is left; the `*_checked` API rejects such inputs.

/// Lower temperature bound of the Magnus formula's validated domain (°C).
///
/// Source: Lawrence 2005, Table 1 (fit range −40 °C < T ≤ 50 °C)
pub const MAGNUS_TEMP_MIN_C: f64 = -40.0;

/// Upper temperature bound of the Magnus formula's validated domain (°C).
///
/// Source: Lawrence 2005, Table 1
pub const MAGNUS_TEMP_MAX_C: f64 = 50.0;

/// Lower relative-humidity bound of the Stull wet-bulb fit (%).
///
/// Source: Stull 2011 (fit documented accurate for 5% < RH < 99%)
pub const STULL_RH_MIN_PCT: f64 = 5.0;

/// Upper relative-humidity bound of the Stull wet-bulb fit (%).
///
/// Source: Stull 2011
pub const STULL_RH_MAX_PCT: f64 = 99.0;

/// Minimum relative humidity for the linear dew-point approximation (%).
///
/// The one-fifth rule degrades quickly in drier air.
///
/// Source: Lawrence 2005, Eq. 1 discussion
pub const LINEAR_DEW_POINT_RH_MIN_PCT: f64 = 50.0;

/// Relative humidity of saturated air (%).
pub const RH_MAX_PCT: f64 = 100.0;
