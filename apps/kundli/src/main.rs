mod render;
mod request;

use anyhow::Context;
use clap::Parser;
use jyotish::{ChartCalculator, ChartSettings, GeoCoordinate, HouseSystem, SwissEphemerisAdapter};
use kundli_config::KundliSettings;
use kundli_geo::{build_resolver, FallbackTable, Provider, ResolverOptions};
use log::debug;
use request::{generate, KundliRequest};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Sidereal (Lahiri) birth chart for a date, time and place.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM:SS or HH:MM.
    #[arg(long)]
    time: String,

    #[arg(long, default_value = "Bangalore")]
    city: String,

    #[arg(long, default_value = "India")]
    country: String,

    /// IANA time zone of the birth time (default from config, Asia/Kolkata).
    #[arg(long)]
    tz: Option<String>,

    /// Geocoding provider override: nominatim, open_meteo or offline.
    #[arg(long)]
    provider: Option<String>,

    /// Config file (otherwise KUNDLI_CONFIG or configs/kundli.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory override.
    #[arg(long)]
    ephe_path: Option<PathBuf>,

    /// Print the chart as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<String> {
    let settings = kundli_config::load_settings(args.config.as_deref())
        .context("Failed to load kundli config")?;
    debug!("Settings: {:?}", settings);

    let resolver = {
        let provider: Provider = args
            .provider
            .as_deref()
            .unwrap_or(&settings.geocoder.provider)
            .parse()?;
        let options = ResolverOptions {
            user_agent: settings.geocoder.user_agent.clone(),
            timeout: Duration::from_secs(settings.geocoder.timeout_secs),
        };
        build_resolver(provider, &options, fallback_table(&settings))?
    };

    let calculator = {
        let house_system: HouseSystem = settings.ephemeris.house_system.parse()?;
        let path = args.ephe_path.clone().or_else(|| settings.ephemeris.path.clone());
        let adapter = SwissEphemerisAdapter::new(path, house_system)?;
        ChartCalculator::new(
            adapter,
            ChartSettings {
                ayanamsa_offset: settings.ephemeris.ayanamsa_offset,
                include_mean_node: settings.chart.include_mean_node,
            },
        )
    };

    let request = KundliRequest {
        date: args.date,
        time: args.time,
        time_zone: args.tz.unwrap_or_else(|| settings.input.time_zone.clone()),
        city: args.city,
        country: args.country,
    };

    let report = generate(&request, &resolver, &calculator).await?;
    if args.json {
        Ok(render::render_json(&report)?)
    } else {
        Ok(render::render_table(&report))
    }
}

/// Built-in cities plus any `[[geocoder.fallback]]` entries.
fn fallback_table(settings: &KundliSettings) -> FallbackTable {
    let mut table = FallbackTable::builtin();
    for entry in &settings.geocoder.fallback {
        table.insert(&entry.city, &entry.country, GeoCoordinate::new(entry.lat, entry.lon));
    }
    table
}
