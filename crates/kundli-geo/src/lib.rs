//! Birth place resolution.
//!
//! A [`LocationResolver`] turns a free-text city/country pair into
//! coordinates. Online providers are wrapped in a [`FallbackResolver`]
//! backed by a static [`FallbackTable`], and the whole chain sits behind a
//! process-lifetime [`CachedResolver`].

pub mod cache;
pub mod fallback;
pub mod nominatim;
pub mod open_meteo;
pub mod query;
pub mod resolver;
pub mod strategy;

pub use cache::CachedResolver;
pub use fallback::{FallbackResolver, FallbackTable};
pub use jyotish::GeoCoordinate;
pub use nominatim::NominatimResolver;
pub use open_meteo::OpenMeteoResolver;
pub use query::LocationQuery;
pub use resolver::{GeocodeError, LocationResolver};
pub use strategy::{build_resolver, Provider, ResolverOptions};
