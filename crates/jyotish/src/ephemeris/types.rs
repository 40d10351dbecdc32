use crate::ephemeris::error::EphemerisError;
use crate::time::JulianDay;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// The thirteen bodies queried for a chart, in Swiss Ephemeris index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Body {
    Sun = 0,
    Moon = 1,
    Mercury = 2,
    Venus = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
    Pluto = 9,
    MeanNode = 10,
    TrueNode = 11,
    MeanApogee = 12,
}

impl Body {
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::MeanNode,
        Body::TrueNode,
        Body::MeanApogee,
    ];

    pub const fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Label as printed by the Swiss Ephemeris planet-name routine.
    pub const fn swe_name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::MeanNode => "mean Node",
            Body::TrueNode => "true Node",
            Body::MeanApogee => "mean Apogee",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.swe_name())
    }
}

/// Raw (tropical) longitude of a body together with the adapter's label for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyLongitude {
    pub longitude: f64,
    pub label: String,
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, HouseSystem)] = &[
    ("placidus", HouseSystem::Placidus),
    ("whole_sign", HouseSystem::WholeSign),
    ("koch", HouseSystem::Koch),
    ("equal", HouseSystem::Equal),
    ("regiomontanus", HouseSystem::Regiomontanus),
    ("campanus", HouseSystem::Campanus),
    ("alcabitius", HouseSystem::Alcabitius),
    ("morinus", HouseSystem::Morinus),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

impl HouseSystem {
    /// Single-letter code understood by the Swiss Ephemeris house routines.
    pub const fn code(self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::WholeSign => b'W',
            HouseSystem::Koch => b'K',
            HouseSystem::Equal => b'E',
            HouseSystem::Regiomontanus => b'R',
            HouseSystem::Campanus => b'C',
            HouseSystem::Alcabitius => b'A',
            HouseSystem::Morinus => b'M',
        }
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system)| *system == self)
            .map(|(name, _)| *name)
            .unwrap_or("placidus")
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _)| *name == s.trim().to_lowercase())
            .map(|(_, system)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

/// Source of raw positions for a chart.
///
/// Longitudes are tropical; the chart calculator applies the ayanamsa.
pub trait Ephemeris {
    /// Lahiri ayanamsa in degrees.
    fn ayanamsa(&self, jd: JulianDay) -> Result<f64, EphemerisError>;

    /// Longitude of the first house cusp.
    fn ascendant_longitude(
        &self,
        jd: JulianDay,
        location: &GeoCoordinate,
    ) -> Result<f64, EphemerisError>;

    fn body_longitude(&self, jd: JulianDay, body: Body) -> Result<BodyLongitude, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn ayanamsa(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        (**self).ayanamsa(jd)
    }

    fn ascendant_longitude(
        &self,
        jd: JulianDay,
        location: &GeoCoordinate,
    ) -> Result<f64, EphemerisError> {
        (**self).ascendant_longitude(jd, location)
    }

    fn body_longitude(&self, jd: JulianDay, body: Body) -> Result<BodyLongitude, EphemerisError> {
        (**self).body_longitude(jd, body)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn ayanamsa(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        (**self).ayanamsa(jd)
    }

    fn ascendant_longitude(
        &self,
        jd: JulianDay,
        location: &GeoCoordinate,
    ) -> Result<f64, EphemerisError> {
        (**self).ascendant_longitude(jd, location)
    }

    fn body_longitude(&self, jd: JulianDay, body: Body) -> Result<BodyLongitude, EphemerisError> {
        (**self).body_longitude(jd, body)
    }
}
