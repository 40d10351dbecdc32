use crate::ephemeris::ayanamsa::lahiri_ayanamsa;
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::types::{Body, BodyLongitude, Ephemeris, GeoCoordinate, HouseSystem};
use crate::time::JulianDay;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};

/// Environment variable naming the directory holding the `.se1` data files.
pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";

// FLG_SWIEPH: use the Swiss Ephemeris files, falling back to the built-in
// Moshier theory when they are absent
const FLG_SWIEPH: i32 = 2;

/// Swiss Ephemeris adapter implementation
///
/// Longitudes are tropical. The Lahiri ayanamsa is computed in-crate from
/// the library's Lahiri epoch definition plus IAU 2006 precession, so every
/// chart row shares one reference value.
pub struct SwissEphemerisAdapter {
    ephemeris_path: Option<PathBuf>,
    house_system: HouseSystem,
    flags: i32,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Without an explicit path `SWISS_EPHEMERIS_PATH` is consulted; with
    /// neither the library's analytical fallback is used.
    pub fn new(
        ephemeris_path: Option<PathBuf>,
        house_system: HouseSystem,
    ) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.or_else(|| env::var(EPHEMERIS_PATH_ENV).ok().map(PathBuf::from));

        if let Some(path) = &path {
            if !path.exists() {
                return Err(EphemerisError::FileNotFound {
                    path: path.display().to_string(),
                    message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
                });
            }
            // `exists()` already rejects paths with interior NULs
            set_ephe_path(&path.to_string_lossy());
            debug!("Swiss Ephemeris data path set to {}", path.display());
        } else {
            debug!("No Swiss Ephemeris data path configured, using built-in theory");
        }

        Ok(Self {
            ephemeris_path: path,
            house_system,
            flags: FLG_SWIEPH,
        })
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    /// Calculate house cusps 1..=12
    pub fn calc_cusps(
        &self,
        jd: JulianDay,
        location: &GeoCoordinate,
    ) -> Result<[f64; 12], EphemerisError> {
        use swisseph::Cusp;

        let (c, _) = houses_ex(
            jd.value(),
            self.flags,
            location.lat,
            location.lon,
            self.house_system.code() as i32,
        );
        let cusps = Cusp::from_array(c);
        let values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];

        if values.iter().any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} cusps undefined at {} for {}",
                    self.house_system.name(),
                    jd,
                    location
                ),
            });
        }

        Ok(values.map(|v| v % 360.0))
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn ayanamsa(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        let value = lahiri_ayanamsa(jd);
        if !value.is_finite() {
            return Err(EphemerisError::AyanamsaFailed {
                julian_day: jd.value(),
                message: "non-finite ayanamsa".to_string(),
            });
        }
        Ok(value)
    }

    fn ascendant_longitude(
        &self,
        jd: JulianDay,
        location: &GeoCoordinate,
    ) -> Result<f64, EphemerisError> {
        self.calc_cusps(jd, location).map(|cusps| cusps[0])
    }

    fn body_longitude(&self, jd: JulianDay, body: Body) -> Result<BodyLongitude, EphemerisError> {
        let result = calc_ut(jd.value(), body.index(), self.flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.swe_name().to_string(),
                julian_day: jd.value(),
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body: body.swe_name().to_string(),
                julian_day: jd.value(),
                message: "non-finite longitude".to_string(),
            });
        }

        Ok(BodyLongitude {
            longitude: longitude % 360.0,
            label: body.swe_name().to_string(),
        })
    }
}
