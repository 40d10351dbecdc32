use crate::sign::SignPosition;
use crate::time::JulianDay;
use serde::Serialize;

pub const LAGNA_LABEL: &str = "Lagna";
pub const RAHU_LABEL: &str = "Rahu";
pub const KETU_LABEL: &str = "Ketu";

/// One line of the chart table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    /// Sidereal longitude in [0, 360)
    pub longitude: f64,
    #[serde(skip_serializing)]
    pub position: SignPosition,
    /// `"{sign}s {degree}d {minute}m"`
    pub formatted: String,
}

impl ChartRow {
    /// `longitude` must already be normalized into [0, 360).
    pub fn new(label: impl Into<String>, longitude: f64) -> Self {
        let position = SignPosition::from_longitude(longitude);
        Self {
            label: label.into(),
            longitude,
            position,
            formatted: position.to_string(),
        }
    }
}

/// Ordered chart rows: Lagna first, then the bodies in ephemeris index
/// order, with Rahu immediately followed by Ketu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub julian_day: JulianDay,
    /// Lahiri ayanamsa shared by every row
    pub ayanamsa: f64,
    pub rows: Vec<ChartRow>,
}

impl Chart {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, label: &str) -> Option<&ChartRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    /// (label, longitude, formatted) triples for display.
    pub fn triples(&self) -> impl Iterator<Item = (&str, f64, &str)> {
        self.rows
            .iter()
            .map(|row| (row.label.as_str(), row.longitude, row.formatted.as_str()))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
