use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// All records of a store, keyed by `YYYY-MM-DD` date.
///
/// A `BTreeMap` keeps keys in lexicographic order, which for fixed-width ISO
/// dates is also chronological order.
pub type Records = BTreeMap<String, WeatherRecord>;

/// One day's weather observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    pub uv_index: f64,
    /// Degrees Celsius
    pub dew_point: f64,
    /// Meters per second
    pub wind_speed: f64,
}

impl WeatherRecord {
    pub fn new(
        temperature: f64,
        humidity: f64,
        uv_index: f64,
        dew_point: f64,
        wind_speed: f64,
    ) -> Self {
        Self {
            temperature,
            humidity,
            uv_index,
            dew_point,
            wind_speed,
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::UvIndex => self.uv_index,
            Metric::DewPoint => self.dew_point,
            Metric::WindSpeed => self.wind_speed,
        }
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Temperature => self.temperature = value,
            Metric::Humidity => self.humidity = value,
            Metric::UvIndex => self.uv_index = value,
            Metric::DewPoint => self.dew_point = value,
            Metric::WindSpeed => self.wind_speed = value,
        }
    }
}

/// The observed quantities, in the order they are asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    UvIndex,
    DewPoint,
    WindSpeed,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::UvIndex,
        Metric::DewPoint,
        Metric::WindSpeed,
    ];

    /// Text shown when asking the user for this metric.
    pub fn prompt(&self) -> &'static str {
        match self {
            Metric::Temperature => " Enter temperature (°C): ",
            Metric::Humidity => " Enter Rel. Humidity (%): ",
            Metric::UvIndex => " Enter UV Index : ",
            Metric::DewPoint => " Enter Dew Point (°C): ",
            Metric::WindSpeed => " Enter Wind Speed (m/s) : ",
        }
    }

    /// Unit suffix used in the report. UV index is dimensionless.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature | Metric::DewPoint => "°C",
            Metric::Humidity => "%",
            Metric::UvIndex => "",
            Metric::WindSpeed => "m/s",
        }
    }

    pub fn next(&self) -> Option<Metric> {
        match self {
            Metric::Temperature => Some(Metric::Humidity),
            Metric::Humidity => Some(Metric::UvIndex),
            Metric::UvIndex => Some(Metric::DewPoint),
            Metric::DewPoint => Some(Metric::WindSpeed),
            Metric::WindSpeed => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "RH (%)",
            Metric::UvIndex => "UV Index",
            Metric::DewPoint => "Dew Point",
            Metric::WindSpeed => "Wind Speed",
        };
        write!(f, "{}", name)
    }
}
