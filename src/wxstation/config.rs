use crate::error::{Result, StationError};
use crate::model::Metric;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Inclusive bounds for a metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Configuration for a station, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationConfig {
    #[serde(default = "default_humidity")]
    pub humidity: Limits,

    #[serde(default = "default_uv_index")]
    pub uv_index: Limits,

    #[serde(default = "default_wind_speed")]
    pub wind_speed: Limits,
}

fn default_humidity() -> Limits {
    Limits::new(0.0, 100.0)
}

fn default_uv_index() -> Limits {
    Limits::new(0.0, 11.0)
}

fn default_wind_speed() -> Limits {
    Limits::new(0.0, 100.0)
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            humidity: default_humidity(),
            uv_index: default_uv_index(),
            wind_speed: default_wind_speed(),
        }
    }
}

impl StationConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StationError::Io)?;
        let config: StationConfig =
            serde_json::from_str(&content).map_err(StationError::Serialization)?;
        Ok(config)
    }

    /// Bounds checked for `metric`, if it has any.
    pub fn limits(&self, metric: Metric) -> Option<Limits> {
        match metric {
            Metric::Humidity => Some(self.humidity),
            Metric::UvIndex => Some(self.uv_index),
            Metric::WindSpeed => Some(self.wind_speed),
            Metric::Temperature | Metric::DewPoint => None,
        }
    }
}
