//! Element-Wise Evaluation over Slices
//!
//! The core functions are scalar; survey and logging pipelines hand over
//! whole traverses of readings at once. These helpers map the scalar
//! functions over equal-length input slices, writing into a caller-owned
//! output buffer so no allocation happens on this side. Elements are
//! independent - no ordering is implied and no element sees another.
//!
//! Mismatched slice lengths return [`DomainError::LengthMismatch`]
//! instead of panicking.

use crate::{
    dew_point, moist_air,
    errors::{DomainError, DomainResult},
    moist_air::MoistAirState,
    wet_bulb,
};

fn check_len(expected: usize, actual: usize) -> DomainResult<()> {
    if expected != actual {
        return Err(DomainError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// [`moist_air::solve`] over slices of readings
///
/// All three inputs and the output must have equal lengths.
pub fn solve_slice(
    t_db_c: &[f64],
    t_wb_c: &[f64],
    pressure_kpa: &[f64],
    out: &mut [MoistAirState],
) -> DomainResult<()> {
    check_len(t_db_c.len(), t_wb_c.len())?;
    check_len(t_db_c.len(), pressure_kpa.len())?;
    check_len(t_db_c.len(), out.len())?;

    for i in 0..t_db_c.len() {
        out[i] = moist_air::solve(t_db_c[i], t_wb_c[i], pressure_kpa[i]);
    }
    Ok(())
}

/// [`wet_bulb::estimate_wet_bulb_c`] over slices of readings
pub fn estimate_wet_bulb_slice(
    t_db_c: &[f64],
    rh_pct: &[f64],
    out: &mut [f64],
) -> DomainResult<()> {
    check_len(t_db_c.len(), rh_pct.len())?;
    check_len(t_db_c.len(), out.len())?;

    for i in 0..t_db_c.len() {
        out[i] = wet_bulb::estimate_wet_bulb_c(t_db_c[i], rh_pct[i]);
    }
    Ok(())
}

/// [`dew_point::saturation_pressure_hpa`] over a slice of temperatures
pub fn saturation_pressure_slice(t_c: &[f64], out: &mut [f64]) -> DomainResult<()> {
    check_len(t_c.len(), out.len())?;

    for i in 0..t_c.len() {
        out[i] = dew_point::saturation_pressure_hpa(t_c[i]);
    }
    Ok(())
}

/// [`dew_point::dew_point_c`] over slices of readings
pub fn dew_point_slice(t_c: &[f64], rh_pct: &[f64], out: &mut [f64]) -> DomainResult<()> {
    check_len(t_c.len(), rh_pct.len())?;
    check_len(t_c.len(), out.len())?;

    for i in 0..t_c.len() {
        out[i] = dew_point::dew_point_c(t_c[i], rh_pct[i]);
    }
    Ok(())
}

/// [`dew_point::dew_point_linear_c`] over slices of readings
pub fn dew_point_linear_slice(t_c: &[f64], rh_pct: &[f64], out: &mut [f64]) -> DomainResult<()> {
    check_len(t_c.len(), rh_pct.len())?;
    check_len(t_c.len(), out.len())?;

    for i in 0..t_c.len() {
        out[i] = dew_point::dew_point_linear_c(t_c[i], rh_pct[i]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_matches_scalar_bitwise() {
        let t_db = [30.0, 15.0, 22.5];
        let t_wb = [20.0, 10.0, 18.0];
        let p = [101.325, 101.325, 95.0];
        let mut out = [MoistAirState::default(); 3];

        solve_slice(&t_db, &t_wb, &p, &mut out).unwrap();

        for i in 0..3 {
            assert_eq!(out[i], moist_air::solve(t_db[i], t_wb[i], p[i]));
        }
    }

    #[test]
    fn dew_point_slice_matches_scalar() {
        let t = [20.0, 25.0, 30.0];
        let rh = [80.0, 60.0, 50.0];
        let mut out = [0.0; 3];

        dew_point_slice(&t, &rh, &mut out).unwrap();

        for i in 0..3 {
            assert_eq!(out[i].to_bits(), dew_point::dew_point_c(t[i], rh[i]).to_bits());
        }
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let mut out = [0.0; 2];
        let result = estimate_wet_bulb_slice(&[25.0, 30.0, 35.0], &[50.0, 60.0], &mut out);
        assert_eq!(
            result,
            Err(DomainError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );

        let result = saturation_pressure_slice(&[0.0, 20.0], &mut out[..1]);
        assert!(matches!(result, Err(DomainError::LengthMismatch { .. })));
    }

    #[test]
    fn empty_slices_are_fine() {
        let mut out: [f64; 0] = [];
        assert!(saturation_pressure_slice(&[], &mut out).is_ok());
    }
}
