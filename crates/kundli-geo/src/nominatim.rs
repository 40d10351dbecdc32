use crate::query::LocationQuery;
use crate::resolver::{GeocodeError, LocationResolver};
use async_trait::async_trait;
use jyotish::GeoCoordinate;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use urlencoding::encode;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// OpenStreetMap Nominatim search.
pub struct NominatimResolver {
    client: Client,
    base_url: String,
}

impl NominatimResolver {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(GeocodeError::Client)?;
        Ok(Self {
            client,
            base_url: NOMINATIM_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self, query: &LocationQuery) -> String {
        format!(
            "{}?q={}&format=json&limit=1",
            self.base_url,
            encode(&query.search_text())
        )
    }
}

/// Parse a Nominatim `format=json` body into the first match.
pub fn parse_nominatim_response(
    query: &LocationQuery,
    body: &str,
) -> Result<Option<GeoCoordinate>, GeocodeError> {
    let malformed = |message: String| GeocodeError::Malformed {
        query: query.search_text(),
        message,
    };

    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;
    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let lat: f64 = place
        .lat
        .parse()
        .map_err(|_| malformed(format!("bad latitude '{}'", place.lat)))?;
    let lon: f64 = place
        .lon
        .parse()
        .map_err(|_| malformed(format!("bad longitude '{}'", place.lon)))?;
    if let Some(name) = &place.display_name {
        debug!("Nominatim matched '{}' to {}", query, name);
    }
    Ok(Some(GeoCoordinate::new(lat, lon)))
}

#[async_trait]
impl LocationResolver for NominatimResolver {
    fn name(&self) -> &str {
        "nominatim"
    }

    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError> {
        let request_error = |source: reqwest::Error| GeocodeError::Request {
            query: query.search_text(),
            source,
        };

        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status {
                query: query.search_text(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        parse_nominatim_response(query, &body)
    }
}
