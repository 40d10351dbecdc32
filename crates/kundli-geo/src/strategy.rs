use crate::cache::CachedResolver;
use crate::fallback::{FallbackResolver, FallbackTable};
use crate::nominatim::NominatimResolver;
use crate::open_meteo::OpenMeteoResolver;
use crate::resolver::{GeocodeError, LocationResolver};
use log::info;
use std::str::FromStr;
use std::time::Duration;

const PROVIDERS: &[(&str, Provider)] = &[
    ("nominatim", Provider::Nominatim),
    ("open_meteo", Provider::OpenMeteo),
    ("offline", Provider::Offline),
];

/// Which geocoding service backs the resolver chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Nominatim,
    OpenMeteo,
    /// Fallback table only, no network access
    Offline,
}

impl FromStr for Provider {
    type Err = GeocodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        PROVIDERS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, provider)| *provider)
            .ok_or_else(|| GeocodeError::UnknownProvider {
                provider: s.to_string(),
                valid: PROVIDERS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            user_agent: "kundli-cli".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Build the cached resolver chain for `provider`.
pub fn build_resolver(
    provider: Provider,
    options: &ResolverOptions,
    table: FallbackTable,
) -> Result<CachedResolver<Box<dyn LocationResolver>>, GeocodeError> {
    let chain: Box<dyn LocationResolver> = match provider {
        Provider::Nominatim => Box::new(FallbackResolver::new(
            NominatimResolver::new(&options.user_agent, options.timeout)?,
            table,
        )),
        Provider::OpenMeteo => Box::new(FallbackResolver::new(
            OpenMeteoResolver::new(&options.user_agent, options.timeout)?,
            table,
        )),
        Provider::Offline => Box::new(table),
    };
    info!("Location resolver: {}", chain.name());
    Ok(CachedResolver::new(chain))
}
