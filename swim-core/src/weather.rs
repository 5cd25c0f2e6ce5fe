//! Current weather by coordinates (OpenWeather "current weather" shape).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

/// Response body of the weather endpoint, requested with `units=metric`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub main: WeatherMain,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Weather {
    /// Temperature rounded to whole degrees, e.g. `21°C`.
    pub fn temperature_label(&self) -> String {
        format!("{:.0}°C", self.main.temp)
    }

    pub fn summary(&self) -> Option<&str> {
        self.weather
            .first()
            .map(|c| c.description.as_str())
            .filter(|d| !d.is_empty())
    }

    /// Wind speed in km/h (the API reports m/s).
    pub fn wind_kmh(&self) -> Option<f64> {
        self.wind.as_ref().map(|w| w.speed * 3.6)
    }
}
