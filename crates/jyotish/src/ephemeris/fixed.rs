use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::types::{Body, BodyLongitude, Ephemeris, GeoCoordinate};
use crate::time::JulianDay;
use std::collections::HashMap;

/// In-memory ephemeris returning preset tropical longitudes.
///
/// Useful for replaying positions captured elsewhere. A body without a
/// preset longitude is reported as a calculation failure.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    ayanamsa: f64,
    ascendant: f64,
    bodies: HashMap<Body, f64>,
}

impl FixedEphemeris {
    pub fn new(ayanamsa: f64, ascendant: f64) -> Self {
        Self {
            ayanamsa,
            ascendant,
            bodies: HashMap::new(),
        }
    }

    pub fn with_body(mut self, body: Body, longitude: f64) -> Self {
        self.bodies.insert(body, longitude);
        self
    }

    /// Preset every body to the same longitude.
    pub fn with_all_bodies(mut self, longitude: f64) -> Self {
        for body in Body::ALL {
            self.bodies.insert(body, longitude);
        }
        self
    }

    pub fn without_body(mut self, body: Body) -> Self {
        self.bodies.remove(&body);
        self
    }
}

impl Ephemeris for FixedEphemeris {
    fn ayanamsa(&self, _jd: JulianDay) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa)
    }

    fn ascendant_longitude(
        &self,
        _jd: JulianDay,
        _location: &GeoCoordinate,
    ) -> Result<f64, EphemerisError> {
        Ok(self.ascendant)
    }

    fn body_longitude(&self, jd: JulianDay, body: Body) -> Result<BodyLongitude, EphemerisError> {
        self.bodies
            .get(&body)
            .map(|&longitude| BodyLongitude {
                longitude,
                label: body.swe_name().to_string(),
            })
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body: body.swe_name().to_string(),
                julian_day: jd.value(),
                message: "no preset longitude".to_string(),
            })
    }
}
