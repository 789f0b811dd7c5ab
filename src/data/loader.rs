//! TOML dataset files

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{MinardError, Result};

use super::{Campaign, Temperature, TemperatureReading, Waypoint};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    max_magnitude: Option<f64>,
    #[serde(default)]
    advance: Vec<WaypointEntry>,
    #[serde(default)]
    retreat: Vec<WaypointEntry>,
    /// Readings attached to retreat waypoints by label
    #[serde(default)]
    temperature: Vec<TemperatureEntry>,
    #[serde(default)]
    temperature_log: Vec<LogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WaypointEntry {
    label: String,
    position: f64,
    magnitude: f64,
    timestamp: String,
    lon: Option<f64>,
    lat: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemperatureEntry {
    at: String,
    reaumur: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogEntry {
    date: String,
    reaumur: f64,
}

impl WaypointEntry {
    fn into_waypoint(self) -> Waypoint {
        let wp = Waypoint::new(self.label, self.position, self.magnitude, self.timestamp);
        match (self.lon, self.lat) {
            (Some(lon), Some(lat)) => wp.with_location(lon, lat),
            _ => wp,
        }
    }
}

/// Load a campaign dataset from a TOML file
pub fn load_campaign(path: &Path) -> Result<Campaign> {
    let text = std::fs::read_to_string(path).map_err(|e| MinardError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_campaign(&text, &path.display().to_string())
}

/// Parse a campaign dataset from TOML text; `source` names it in errors
pub fn parse_campaign(text: &str, source: &str) -> Result<Campaign> {
    let file: DatasetFile = toml::from_str(text).map_err(|e| MinardError::Parse {
        path: source.to_string(),
        message: e.message().to_string(),
    })?;

    debug!(
        source,
        advance = file.advance.len(),
        retreat = file.retreat.len(),
        readings = file.temperature.len(),
        "parsed dataset"
    );

    let advance = file.advance.into_iter().map(WaypointEntry::into_waypoint).collect();
    let retreat = file.retreat.into_iter().map(WaypointEntry::into_waypoint).collect();

    let mut campaign = Campaign::new(advance, retreat)?;
    for reading in &file.temperature {
        campaign.attach_temperature(&reading.at, Temperature::from_reaumur(reading.reaumur))?;
    }
    if let Some(max) = file.max_magnitude {
        campaign = campaign.with_max_magnitude(max)?;
    }

    let log = file
        .temperature_log
        .into_iter()
        .map(|entry| TemperatureReading::new(entry.date, entry.reaumur))
        .collect();

    campaign.with_temperature_log(log)
}
