//! Configuration models and loaders for the Overpass Predictor.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Orbital platform record parsed from scenario catalogs.
#[derive(Debug, Deserialize, Clone)]
pub struct PlatformConfig {
    pub name: String,
    /// Reference instant for the ground track, RFC 3339.
    pub epoch: String,
    /// Ground position under the platform at the epoch.
    pub lat_deg: f64,
    pub lon_deg: f64,
    /// Ground-track heading at the epoch, degrees clockwise from north.
    pub heading_deg: f64,
    pub ground_speed_km_h: f64,
    /// Hours between repeat passes of the same ground track.
    #[serde(default = "default_revisit_interval_hours")]
    pub revisit_interval_hours: f64,
    /// Coverage percentage carried for reporting; the geometry ignores it.
    #[serde(default)]
    pub cloud_cover_pct: u8,
}

fn default_revisit_interval_hours() -> f64 {
    // 16-day repeat cycle.
    16.0 * 24.0
}

/// Ground site record parsed from scenario catalogs.
#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    pub name: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read YAML: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse epoch '{0}': expected an RFC 3339 timestamp")]
    Epoch(String),
}

/// Load platform records from a YAML file or a directory of TOML records.
pub fn load_platforms<P: AsRef<Path>>(path: P) -> Result<Vec<PlatformConfig>, ConfigError> {
    load_records(path)
}

/// Load target records from a YAML file or a directory of TOML records.
pub fn load_targets<P: AsRef<Path>>(path: P) -> Result<Vec<TargetConfig>, ConfigError> {
    load_records(path)
}

/// Parse a catalog epoch string into UTC.
pub fn parse_epoch(epoch: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(epoch)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ConfigError::Epoch(epoch.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
