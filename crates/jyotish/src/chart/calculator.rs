use crate::chart::data::{Chart, ChartRow, KETU_LABEL, LAGNA_LABEL, RAHU_LABEL};
use crate::chart::settings::ChartSettings;
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::types::{Body, Ephemeris, GeoCoordinate};
use crate::sign::{normalize_degrees, sidereal_longitude};
use crate::time::JulianDay;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Ayanamsa unavailable: {0}")]
    Ayanamsa(#[source] EphemerisError),
    #[error("Ascendant unavailable: {0}")]
    Ascendant(#[source] EphemerisError),
    #[error("Position of {body} unavailable: {source}")]
    Body {
        body: Body,
        #[source]
        source: EphemerisError,
    },
}

/// Builds sidereal charts from an [`Ephemeris`].
pub struct ChartCalculator<E> {
    ephemeris: E,
    settings: ChartSettings,
}

impl<E: Ephemeris> ChartCalculator<E> {
    pub fn new(ephemeris: E, settings: ChartSettings) -> Self {
        Self {
            ephemeris,
            settings,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Compute the chart for a UT Julian day and location.
    ///
    /// The ayanamsa is fetched once and shared by every row. Any ephemeris
    /// fault aborts the whole chart.
    pub fn calculate(&self, jd: JulianDay, location: &GeoCoordinate) -> Result<Chart, ChartError> {
        let offset = self.settings.ayanamsa_offset;
        let ayanamsa = self.ephemeris.ayanamsa(jd).map_err(ChartError::Ayanamsa)?;
        debug!("{}: ayanamsa {:.6}, offset {}", jd, ayanamsa, offset);

        let mut rows = Vec::with_capacity(self.settings.row_count());

        let asc = self
            .ephemeris
            .ascendant_longitude(jd, location)
            .map_err(ChartError::Ascendant)?;
        rows.push(ChartRow::new(LAGNA_LABEL, sidereal_longitude(asc, ayanamsa, offset)));

        for body in self.settings.bodies() {
            let raw = self
                .ephemeris
                .body_longitude(jd, body)
                .map_err(|source| ChartError::Body { body, source })?;
            let lon = sidereal_longitude(raw.longitude, ayanamsa, offset);

            if body == Body::TrueNode {
                rows.push(ChartRow::new(RAHU_LABEL, lon));
                rows.push(ChartRow::new(KETU_LABEL, normalize_degrees(lon + 180.0)));
            } else {
                rows.push(ChartRow::new(raw.label, lon));
            }
        }

        for row in &rows {
            debug!("{:>12} {:>10.4} {}", row.label, row.longitude, row.formatted);
        }

        Ok(Chart {
            julian_day: jd,
            ayanamsa,
            rows,
        })
    }
}
