//! Longitude normalization and sign/degree/minute decomposition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Empirical correction added to every sidereal longitude, ascendant included.
pub const AYANAMSA_OFFSET_DEG: f64 = 0.88;

pub const SIGN_SPAN_DEG: f64 = 30.0;

pub const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-15 + 360.0 rounds to 360.0
    if normalized >= 360.0 {
        normalized = 0.0;
    }
    normalized
}

/// Shift a tropical longitude into the sidereal frame:
/// `raw - ayanamsa + offset`, wrapped into [0, 360).
pub fn sidereal_longitude(raw: f64, ayanamsa: f64, offset: f64) -> f64 {
    normalize_degrees(raw - ayanamsa + offset)
}

/// A longitude split into zodiac sign (0-11), degree in sign (0-29) and
/// minute in degree (0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: u8,
    pub degree: u8,
    pub minute: u8,
}

impl SignPosition {
    /// `longitude` must already be normalized into [0, 360).
    ///
    /// The minute comes from the fractional part of the whole longitude,
    /// which equals the fractional part of `longitude % 30`.
    pub fn from_longitude(longitude: f64) -> Self {
        let sign = (longitude / SIGN_SPAN_DEG).floor() as u8;
        let degree = (longitude % SIGN_SPAN_DEG).floor() as u8;
        let minute = (longitude.fract() * 60.0).floor() as u8;
        Self {
            sign,
            degree,
            minute,
        }
    }

    /// Longitude in degrees, truncated to the minute.
    pub fn to_degrees(self) -> f64 {
        self.sign as f64 * SIGN_SPAN_DEG + self.degree as f64 + self.minute as f64 / 60.0
    }

    pub fn sign_name(self) -> &'static str {
        SIGN_NAMES[self.sign as usize % SIGN_NAMES.len()]
    }
}

impl fmt::Display for SignPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s {}d {}m", self.sign, self.degree, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-1e-15), 0.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut lon = 0.0;
        while lon < 360.0 {
            assert_eq!(normalize_degrees(lon), lon);
            assert_eq!(normalize_degrees(normalize_degrees(lon)), normalize_degrees(lon));
            lon += 0.37;
        }
    }

    #[test]
    fn test_negative_correction_wraps_once() {
        assert_abs_diff_eq!(sidereal_longitude(19.0, 24.0, 0.0), 355.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_degrees(-5.0), 355.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ascendant_worked_example() {
        let lon = sidereal_longitude(100.0, 24.0, AYANAMSA_OFFSET_DEG);
        assert_abs_diff_eq!(lon, 76.88, epsilon = 1e-9);

        let pos = SignPosition::from_longitude(lon);
        assert_eq!(pos, SignPosition { sign: 2, degree: 16, minute: 52 });
        assert_eq!(pos.sign_name(), "Gemini");
        assert_eq!(pos.to_string(), "2s 16d 52m");
    }

    #[test]
    fn test_reconstruction_within_one_minute() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let pos = SignPosition::from_longitude(lon);
            assert!(pos.sign <= 11, "sign {} for {}", pos.sign, lon);
            assert!(pos.degree <= 29, "degree {} for {}", pos.degree, lon);
            assert!(pos.minute <= 59, "minute {} for {}", pos.minute, lon);
            let diff = lon - pos.to_degrees();
            assert!(diff > -1e-9 && diff < 1.0 / 60.0 + 1e-9, "{} -> {}", lon, pos);
            lon += 0.0137;
        }
    }

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(SignPosition::from_longitude(0.0).to_string(), "0s 0d 0m");
        assert_eq!(SignPosition::from_longitude(29.999).to_string(), "0s 29d 59m");
        assert_eq!(SignPosition::from_longitude(30.0).to_string(), "1s 0d 0m");
        assert_eq!(SignPosition::from_longitude(359.99).to_string(), "11s 29d 59m");
    }
}
