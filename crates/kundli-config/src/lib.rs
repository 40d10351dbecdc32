use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "KUNDLI_CONFIG";

const DEFAULT_PATHS: &[&str] = &["configs/kundli.toml", "../../configs/kundli.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSettings {
    pub path: Option<PathBuf>,
    pub house_system: String,
    pub ayanamsa_offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub include_mean_node: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallbackEntry {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderSettings {
    pub provider: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub fallback: Vec<FallbackEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputSettings {
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KundliSettings {
    pub ephemeris: EphemerisSettings,
    pub chart: ChartOptions,
    pub geocoder: GeocoderSettings,
    pub input: InputSettings,
}

impl Default for KundliSettings {
    fn default() -> Self {
        // An empty document picks up every serde default
        let root: RootConfigToml = toml::from_str("").unwrap_or_default();
        Self::from(root)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default = "default_ayanamsa_offset")]
    ayanamsa_offset: f64,
}

impl Default for EphemerisToml {
    fn default() -> Self {
        Self {
            path: None,
            house_system: default_house_system(),
            ayanamsa_offset: default_ayanamsa_offset(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    include_mean_node: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FallbackEntryToml {
    city: String,
    country: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeocoderToml {
    #[serde(default = "default_provider")]
    provider: String,
    #[serde(default = "default_user_agent")]
    user_agent: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default)]
    fallback: Vec<FallbackEntryToml>,
}

impl Default for GeocoderToml {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            fallback: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputToml {
    #[serde(default = "default_time_zone")]
    time_zone: String,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    geocoder: GeocoderToml,
    #[serde(default)]
    input: InputToml,
}

fn default_house_system() -> String {
    "placidus".to_string()
}

fn default_ayanamsa_offset() -> f64 {
    0.88
}

fn default_provider() -> String {
    "nominatim".to_string()
}

fn default_user_agent() -> String {
    "kundli-cli".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_time_zone() -> String {
    "Asia/Kolkata".to_string()
}

impl From<RootConfigToml> for KundliSettings {
    fn from(root: RootConfigToml) -> Self {
        let RootConfigToml {
            ephemeris,
            chart,
            geocoder,
            input,
        } = root;
        Self {
            ephemeris: EphemerisSettings {
                path: ephemeris.path,
                house_system: ephemeris.house_system,
                ayanamsa_offset: ephemeris.ayanamsa_offset,
            },
            chart: ChartOptions {
                include_mean_node: chart.include_mean_node,
            },
            geocoder: GeocoderSettings {
                provider: geocoder.provider,
                user_agent: geocoder.user_agent,
                timeout_secs: geocoder.timeout_secs,
                fallback: geocoder
                    .fallback
                    .into_iter()
                    .map(|e| FallbackEntry {
                        city: e.city,
                        country: e.country,
                        lat: e.lat,
                        lon: e.lon,
                    })
                    .collect(),
            },
            input: InputSettings {
                time_zone: input.time_zone,
            },
        }
    }
}

/// Locate the config text: explicit path, then `KUNDLI_CONFIG`, then the
/// common relative `configs/kundli.toml` paths. `Ok(None)` when only the
/// default locations were tried and none exists.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<String>> {
    let requested = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from));
    if let Some(path) = requested {
        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some(text));
    }
    for p in DEFAULT_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some(c));
        }
    }
    Ok(None)
}

pub fn validate_settings(settings: &KundliSettings) -> anyhow::Result<()> {
    if let Some(path) = &settings.ephemeris.path {
        if !path.exists() {
            anyhow::bail!("ephemeris.path does not exist: {}", path.display());
        }
    }
    if !settings.ephemeris.ayanamsa_offset.is_finite() {
        anyhow::bail!("ephemeris.ayanamsa_offset must be a finite number of degrees");
    }
    if settings.geocoder.timeout_secs == 0 {
        anyhow::bail!("geocoder.timeout_secs must be positive");
    }
    if settings.input.time_zone.trim().is_empty() {
        anyhow::bail!("input.time_zone must not be empty");
    }
    for entry in &settings.geocoder.fallback {
        if !(-90.0..=90.0).contains(&entry.lat) || !(-180.0..=180.0).contains(&entry.lon) {
            anyhow::bail!(
                "geocoder.fallback entry {}, {} has out-of-range coordinates ({}, {})",
                entry.city,
                entry.country,
                entry.lat,
                entry.lon
            );
        }
    }
    Ok(())
}

pub fn parse_settings(text: &str) -> anyhow::Result<KundliSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse kundli config: {e}"))?;
    let settings = KundliSettings::from(root);
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<KundliSettings> {
    match read_config_text(explicit)? {
        Some(text) => parse_settings(&text),
        None => Ok(KundliSettings::default()),
    }
}
