//! Moist-air thermodynamics for ventilation engineering
//!
//! Pure psychrometric conversions from measured atmospheric inputs:
//! relative humidity, dew point and humidity ratio from wet- and dry-bulb
//! readings, wet-bulb estimation from relative humidity, and saturation
//! vapor pressure over the meteorological temperature range.
//!
//! Key constraints:
//! - Every operation is a pure, stateless function over `f64`
//! - No heap allocation, no I/O, safe from any thread
//! - `no_std` compatible (disable the `std` feature)
//!
//! The API comes in two tiers. The permissive functions mirror the field
//! formulas exactly: no validation, with physically invalid inputs
//! degenerating to non-finite results (and a `log` warning under the
//! `std` feature). The `*_checked` variants validate each correlation's
//! documented domain first and fail with a [`DomainError`] instead.
//!
//! ```
//! use psychro_core::solve;
//!
//! // Whirling-hygrometer reading: 30 °C dry bulb, 20 °C wet bulb,
//! // barometer at 101.325 kPa.
//! let state = solve(30.0, 20.0, 101.325);
//!
//! assert!((state.relative_humidity_pct - 39.78).abs() < 0.01);
//! assert!(state.dew_point_c < 30.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

pub mod batch;
pub mod constants;
pub mod dew_point;
pub mod errors;
pub mod moist_air;
pub mod wet_bulb;

// Public API
pub use errors::{DomainError, DomainResult};
pub use moist_air::{solve, solve_checked, MoistAirState};
pub use wet_bulb::{estimate_wet_bulb_c, estimate_wet_bulb_checked};
pub use dew_point::{dew_point_c, dew_point_linear_c, saturation_pressure_hpa};

/// Crate version, taken from the manifest at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
