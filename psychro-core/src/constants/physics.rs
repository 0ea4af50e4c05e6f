//! Physical Properties of Dry Air and Water Vapor
//!
//! Fundamental constants used by the psychrometric derivation. Values
//! follow the Mine Ventilation Society conventions so that results match
//! whirling-hygrometer tables used in the field.

/// Molar mass of water vapor (kg/kmol).
///
/// Source: Environmental Engineering in South African Mines,
/// The Mine Ventilation Society of South Africa, 1989, pp 451-455
pub const WATER_MOLAR_MASS_KG_PER_KMOL: f64 = 18.016;

/// Molar mass of dry air (kg/kmol).
///
/// Composition-weighted average for the standard atmosphere.
///
/// Source: Environmental Engineering in South African Mines, 1989
pub const DRY_AIR_MOLAR_MASS_KG_PER_KMOL: f64 = 28.9664;

/// Ratio of water-vapor to dry-air molar mass (dimensionless).
///
/// Appears in every mass-based moisture relation; often quoted as 0.622
/// in HVAC texts, kept here at full precision.
pub const MOLAR_MASS_RATIO: f64 = WATER_MOLAR_MASS_KG_PER_KMOL / DRY_AIR_MOLAR_MASS_KG_PER_KMOL;

/// Enhancement factor for moist air (dimensionless).
///
/// Corrects the vapor-pressure relations for the departure of moist air
/// from an ideal mixture of ideal gases.
///
/// Source: Environmental Engineering in South African Mines, 1989
pub const ENHANCEMENT_FACTOR: f64 = 1.0048;

/// Universal gas constant (kJ/(kmol·K)).
///
/// Divided by the dry-air molar mass to obtain the specific gas
/// constant of air, 0.28704 kJ/(kg·K).
///
/// Source: CODATA 1986 value as used by the Mine Ventilation Society
pub const UNIVERSAL_GAS_CONSTANT_KJ_PER_KMOL_K: f64 = 8.31436;

/// Specific heat capacity of dry air (kJ/(kg·K)).
///
/// Treated as constant over the meteorological temperature range.
///
/// Source: NIST Chemistry WebBook
pub const DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 1.005;

/// Offset from degrees Celsius to kelvin.
///
/// Source: NIST Special Publication 330 (2019)
pub const CELSIUS_TO_KELVIN: f64 = 273.15;
