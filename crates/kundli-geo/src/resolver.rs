use crate::query::LocationQuery;
use async_trait::async_trait;
use jyotish::GeoCoordinate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding request for '{query}' failed: {source}")]
    Request {
        query: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Geocoding service returned HTTP {status} for '{query}'")]
    Status { query: String, status: u16 },
    #[error("Malformed geocoding response for '{query}': {message}")]
    Malformed { query: String, message: String },
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Unknown geocoder provider: {provider}. Valid providers: {valid:?}")]
    UnknownProvider { provider: String, valid: Vec<String> },
}

/// Maps a city/country pair to coordinates.
///
/// `Ok(None)` means the place is unknown; `Err` means the lookup itself failed.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    fn name(&self) -> &str;

    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError>;
}

#[async_trait]
impl<R: LocationResolver + ?Sized> LocationResolver for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError> {
        (**self).resolve(query).await
    }
}
