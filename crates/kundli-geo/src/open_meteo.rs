use crate::query::LocationQuery;
use crate::resolver::{GeocodeError, LocationResolver};
use async_trait::async_trait;
use jyotish::GeoCoordinate;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use urlencoding::encode;

pub const OPEN_METEO_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

// Candidates fetched per city name before filtering by country
const CANDIDATES: u32 = 10;

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    #[serde(default)]
    results: Vec<OpenMeteoPlace>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoPlace {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    country_code: Option<String>,
}

impl OpenMeteoPlace {
    fn in_country(&self, country: &str) -> bool {
        let matches =
            |field: &Option<String>| field.as_deref().is_some_and(|v| v.eq_ignore_ascii_case(country));
        matches(&self.country) || matches(&self.country_code)
    }
}

/// Open-Meteo geocoding, searched by city name and filtered by country.
pub struct OpenMeteoResolver {
    client: Client,
    base_url: String,
}

impl OpenMeteoResolver {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(GeocodeError::Client)?;
        Ok(Self {
            client,
            base_url: OPEN_METEO_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self, query: &LocationQuery) -> String {
        format!(
            "{}?name={}&count={}&language=en&format=json",
            self.base_url,
            encode(query.city()),
            CANDIDATES
        )
    }
}

/// Pick the first candidate in the requested country.
pub fn parse_open_meteo_response(
    query: &LocationQuery,
    body: &str,
) -> Result<Option<GeoCoordinate>, GeocodeError> {
    let response: OpenMeteoResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::Malformed {
            query: query.search_text(),
            message: e.to_string(),
        })?;

    let place = response
        .results
        .into_iter()
        .find(|place| query.country().is_empty() || place.in_country(query.country()));

    Ok(place.map(|place| {
        debug!("Open-Meteo matched '{}' to {}", query, place.name);
        GeoCoordinate::new(place.latitude, place.longitude)
    }))
}

#[async_trait]
impl LocationResolver for OpenMeteoResolver {
    fn name(&self) -> &str {
        "open_meteo"
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
        parse_open_meteo_response(query, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HYDERABAD: &str = r#"{"results": [
        {"name": "Hyderabad", "latitude": 25.392, "longitude": 68.374, "country": "Pakistan", "country_code": "PK"},
        {"name": "Hyderabad", "latitude": 17.384, "longitude": 78.456, "country": "India", "country_code": "IN"}
    ]}"#;

    #[test]
    fn test_filters_by_country_name() {
        let query = LocationQuery::new("Hyderabad", "india");
        let coord = parse_open_meteo_response(&query, HYDERABAD).unwrap().unwrap();
        assert_eq!(coord, GeoCoordinate::new(17.384, 78.456));
    }

    #[test]
    fn test_filters_by_country_code() {
        let query = LocationQuery::new("Hyderabad", "PK");
        let coord = parse_open_meteo_response(&query, HYDERABAD).unwrap().unwrap();
        assert_eq!(coord, GeoCoordinate::new(25.392, 68.374));
    }

    #[test]
    fn test_no_results_field() {
        // The service omits `results` entirely when nothing matches
        let query = LocationQuery::new("Nowhere", "Nowhereland");
        assert_eq!(parse_open_meteo_response(&query, r#"{"generationtime_ms": 0.5}"#).unwrap(), None);
    }

    #[test]
    fn test_wrong_country_is_not_found() {
        let query = LocationQuery::new("Hyderabad", "Nepal");
        assert_eq!(parse_open_meteo_response(&query, HYDERABAD).unwrap(), None);
    }
}
