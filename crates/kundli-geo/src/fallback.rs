use crate::query::LocationQuery;
use crate::resolver::{GeocodeError, LocationResolver};
use async_trait::async_trait;
use jyotish::GeoCoordinate;
use log::{error, warn};
use std::collections::HashMap;

/// Hardcoded coordinates for key cities
const BUILTIN_LOCATIONS: &[(&str, &str, f64, f64)] = &[
    ("Bangalore", "India", 12.9716, 77.5946),
    ("Chennai", "India", 13.0827, 80.2707),
    ("Delhi", "India", 28.6139, 77.2090),
    ("Mumbai", "India", 19.0760, 72.8777),
    ("Kolkata", "India", 22.5726, 88.3639),
];

/// Static city/country to coordinate table keyed by [`LocationQuery::key`].
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    entries: HashMap<String, GeoCoordinate>,
}

impl FallbackTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for &(city, country, lat, lon) in BUILTIN_LOCATIONS {
            table.insert(city, country, GeoCoordinate::new(lat, lon));
        }
        table
    }

    pub fn insert(&mut self, city: &str, country: &str, coord: GeoCoordinate) {
        self.entries
            .insert(LocationQuery::new(city, country).key(), coord);
    }

    pub fn lookup(&self, query: &LocationQuery) -> Option<GeoCoordinate> {
        self.entries.get(&query.key()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The table on its own acts as an offline resolver.
#[async_trait]
impl LocationResolver for FallbackTable {
    fn name(&self) -> &str {
        "offline"
    }

    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError> {
        Ok(self.lookup(query))
    }
}

/// Tries `primary` first and falls back to the table on a miss or failure.
///
/// A primary failure with no table entry is reported as not found, so the
/// caller sees a missing location rather than a transport error.
pub struct FallbackResolver<P> {
    primary: P,
    table: FallbackTable,
}

impl<P: LocationResolver> FallbackResolver<P> {
    pub fn new(primary: P, table: FallbackTable) -> Self {
        Self { primary, table }
    }

    pub fn table(&self) -> &FallbackTable {
        &self.table
    }
}

#[async_trait]
impl<P: LocationResolver> LocationResolver for FallbackResolver<P> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError> {
        match self.primary.resolve(query).await {
            Ok(Some(coord)) => Ok(Some(coord)),
            Ok(None) => {
                let fallback = self.table.lookup(query);
                if fallback.is_some() {
                    warn!("Using fallback coordinates for {}", query);
                }
                Ok(fallback)
            }
            Err(e) => match self.table.lookup(query) {
                Some(coord) => {
                    warn!("Geocoding failed: {}. Using fallback for {}", e, query);
                    Ok(Some(coord))
                }
                None => {
                    error!("Geolocation failed and no fallback is available: {}", e);
                    Ok(None)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<GeoCoordinate>);

    #[async_trait]
    impl LocationResolver for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn resolve(&self, _query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError> {
            Ok(self.0)
        }
    }

    struct Failing;

    #[async_trait]
    impl LocationResolver for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError> {
            Err(GeocodeError::Status {
                query: query.search_text(),
                status: 503,
            })
        }
    }

    fn delhi() -> LocationQuery {
        LocationQuery::new("delhi", "INDIA")
    }

    #[test]
    fn test_builtin_table() {
        let table = FallbackTable::builtin();
        assert_eq!(table.len(), 5);
        assert_eq!(table.lookup(&delhi()), Some(GeoCoordinate::new(28.6139, 77.2090)));
        assert_eq!(table.lookup(&LocationQuery::new("Pune", "India")), None);
    }

    #[tokio::test]
    async fn test_primary_hit_wins() {
        let hit = GeoCoordinate::new(28.7, 77.1);
        let resolver = FallbackResolver::new(Fixed(Some(hit)), FallbackTable::builtin());
        assert_eq!(resolver.resolve(&delhi()).await.unwrap(), Some(hit));
    }

    #[tokio::test]
    async fn test_primary_miss_uses_table() {
        let resolver = FallbackResolver::new(Fixed(None), FallbackTable::builtin());
        assert_eq!(
            resolver.resolve(&delhi()).await.unwrap(),
            Some(GeoCoordinate::new(28.6139, 77.2090))
        );
    }

    #[tokio::test]
    async fn test_primary_failure_uses_table() {
        let resolver = FallbackResolver::new(Failing, FallbackTable::builtin());
        assert_eq!(
            resolver.resolve(&delhi()).await.unwrap(),
            Some(GeoCoordinate::new(28.6139, 77.2090))
        );
    }

    #[tokio::test]
    async fn test_unknown_place_is_not_found() {
        let nowhere = LocationQuery::new("Nowhere", "Nowhereland");
        let resolver = FallbackResolver::new(Fixed(None), FallbackTable::builtin());
        assert_eq!(resolver.resolve(&nowhere).await.unwrap(), None);

        let resolver = FallbackResolver::new(Failing, FallbackTable::builtin());
        assert_eq!(resolver.resolve(&nowhere).await.unwrap(), None);
    }
}
