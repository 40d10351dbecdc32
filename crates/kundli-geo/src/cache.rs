use crate::query::LocationQuery;
use crate::resolver::{GeocodeError, LocationResolver};
use async_trait::async_trait;
use jyotish::GeoCoordinate;
use log::debug;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Remembers every successful lookup, found or not, for the lifetime of the
/// resolver. Failures are not cached. There is no eviction.
pub struct CachedResolver<R> {
    inner: R,
    entries: Mutex<HashMap<String, Option<GeoCoordinate>>>,
}

impl<R: LocationResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl<R: LocationResolver> LocationResolver for CachedResolver<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, GeocodeError> {
        let key = query.key();
        if let Some(cached) = self.entries.lock().await.get(&key) {
            debug!("Location cache hit for '{}'", key);
            return Ok(*cached);
        }

        let resolved = self.inner.resolve(query).await?;
        self.entries.lock().await.insert(key, resolved);
        Ok(resolved)
    }
}
