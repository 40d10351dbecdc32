pub mod adapter;
pub mod ayanamsa;
pub mod error;
pub mod fixed;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use ayanamsa::lahiri_ayanamsa;
pub use error::EphemerisError;
pub use fixed::FixedEphemeris;
pub use types::{Body, BodyLongitude, Ephemeris, GeoCoordinate, HouseSystem};
