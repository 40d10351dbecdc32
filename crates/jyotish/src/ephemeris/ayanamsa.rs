//! Lahiri (Chitrapaksha) ayanamsa.
//!
//! Anchored on the Swiss Ephemeris `SE_SIDM_LAHIRI` definition: 23.245524743
//! deg at JD 2435553.5 (1956-03-21), plus the IAU 2006 general precession in
//! ecliptic longitude accumulated between that epoch and the chart moment.

use crate::time::{JulianDay, J2000_JD};

/// Reference epoch of the Lahiri definition (1956-03-21 0h TT).
pub const LAHIRI_T0_JD: f64 = 2_435_553.5;

/// Lahiri ayanamsa at [`LAHIRI_T0_JD`] in degrees.
pub const LAHIRI_T0_DEG: f64 = 23.250_182_778 - 0.004_658_035;

const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` is Julian centuries since J2000.0.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// Mean Lahiri ayanamsa in degrees.
pub fn lahiri_ayanamsa(jd: JulianDay) -> f64 {
    let t0 = (LAHIRI_T0_JD - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let precession = general_precession_longitude_arcsec(jd.centuries_since_j2000())
        - general_precession_longitude_arcsec(t0);
    LAHIRI_T0_DEG + precession / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ARCSEC: f64 = 1.0 / 3600.0;

    #[test]
    fn test_value_at_defining_epoch() {
        assert_abs_diff_eq!(
            lahiri_ayanamsa(JulianDay(LAHIRI_T0_JD)),
            23.245_524_743,
            epsilon = 0.01 * ARCSEC
        );
    }

    #[test]
    fn test_value_at_j2000() {
        // 23.245524743 deg + 2201.51" of precession from 1956 to 2000
        assert_abs_diff_eq!(lahiri_ayanamsa(JulianDay(J2000_JD)), 23.857_056, epsilon = ARCSEC);
    }

    #[test]
    fn test_rate_per_year() {
        // ~50.29" per year
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn test_modern_values() {
        // Published Lahiri values: ~23.72 deg in 1990, ~24.19 deg in 2024
        let jd_1990 = JulianDay(2_447_892.5);
        let jd_2024 = JulianDay(2_460_310.5);
        assert_abs_diff_eq!(lahiri_ayanamsa(jd_1990), 23.72, epsilon = 0.02);
        assert_abs_diff_eq!(lahiri_ayanamsa(jd_2024), 24.19, epsilon = 0.02);
        assert!(lahiri_ayanamsa(jd_2024) > lahiri_ayanamsa(jd_1990));
    }
}
