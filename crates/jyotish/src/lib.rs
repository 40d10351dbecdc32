//! Sidereal D1 ("rasi") chart calculation.
//!
//! A chart is built from a UTC Julian day, a geographic location and an
//! [`Ephemeris`] capability. Every longitude is shifted into the Lahiri
//! sidereal frame, nudged by a fixed offset, and decomposed into
//! sign/degree/minute.

pub mod chart;
pub mod ephemeris;
pub mod sign;
pub mod time;

pub use chart::{Chart, ChartCalculator, ChartError, ChartRow, ChartSettings};
pub use ephemeris::{
    Body, BodyLongitude, Ephemeris, EphemerisError, FixedEphemeris, GeoCoordinate, HouseSystem,
    SwissEphemerisAdapter,
};
pub use sign::{normalize_degrees, sidereal_longitude, SignPosition, AYANAMSA_OFFSET_DEG};
pub use time::{BirthMoment, JulianDay, TimeError};
