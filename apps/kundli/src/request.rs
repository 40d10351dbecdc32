use jyotish::{BirthMoment, Chart, ChartCalculator, ChartError, Ephemeris, GeoCoordinate, TimeError};
use kundli_geo::{LocationQuery, LocationResolver};
use log::{info, warn};
use thiserror::Error;

/// The three ways a chart request can fail, each with its own message.
#[derive(Error, Debug)]
pub enum KundliError {
    #[error("Could not read birth date/time: {0}")]
    InputParse(#[from] TimeError),
    #[error("Could not find coordinates for {query}. Check the city and country spelling.")]
    LocationNotFound { query: String },
    #[error("Chart calculation failed: {0}")]
    Ephemeris(#[from] ChartError),
}

/// Raw form inputs.
#[derive(Debug, Clone)]
pub struct KundliRequest {
    pub date: String,
    pub time: String,
    pub time_zone: String,
    pub city: String,
    pub country: String,
}

/// Everything shown to the user for one request.
#[derive(Debug, Clone)]
pub struct KundliReport {
    pub moment: BirthMoment,
    pub query: LocationQuery,
    pub location: GeoCoordinate,
    pub chart: Chart,
}

/// Parse the moment, resolve the place, then build the chart.
///
/// Stops at the first failure; the calculator is never reached when the
/// input or the location is bad.
pub async fn generate<R, E>(
    request: &KundliRequest,
    resolver: &R,
    calculator: &ChartCalculator<E>,
) -> Result<KundliReport, KundliError>
where
    R: LocationResolver + ?Sized,
    E: Ephemeris,
{
    let moment = BirthMoment::parse(&request.date, &request.time, &request.time_zone)?;
    let jd = moment.julian_day();
    info!("Birth moment {} {} -> {} UTC ({})", moment.local(), moment.zone(), moment.utc(), jd);

    let query = LocationQuery::new(&request.city, &request.country);
    let location = match resolver.resolve(&query).await {
        Ok(Some(coord)) => coord,
        Ok(None) => {
            return Err(KundliError::LocationNotFound {
                query: query.search_text(),
            })
        }
        Err(e) => {
            warn!("Resolver {} failed: {}", resolver.name(), e);
            return Err(KundliError::LocationNotFound {
                query: query.search_text(),
            });
        }
    };
    info!("{} resolved to {}", query, location);

    let chart = calculator.calculate(jd, &location)?;
    Ok(KundliReport {
        moment,
        query,
        location,
        chart,
    })
}
