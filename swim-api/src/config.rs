//! Client configuration.
//!
//! The web build has no process environment, so its settings are read at
//! compile time ([`ApiConfig::from_build_env`]). The CLI passes its own
//! values through the builder methods.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Root of the REST API, e.g. `https://api.example.com/api/v1`.
    pub base_url: String,
    /// Per-request timeout (native targets only; the browser governs WASM fetches).
    pub timeout: Duration,
    pub weather_url: String,
    pub weather_api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            weather_api_key: None,
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `SWIM_API_BASE_URL`, `SWIM_API_TIMEOUT_MS` and
    /// `OPENWEATHER_API_KEY` as set when the crate was compiled.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("SWIM_API_BASE_URL") {
            config.base_url = url.to_string();
        }
        if let Some(ms) = option_env!("SWIM_API_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok()) {
            config.timeout = Duration::from_millis(ms);
        }
        config.weather_api_key = option_env!("OPENWEATHER_API_KEY")
            .filter(|key| !key.is_empty())
            .map(str::to_string);
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_weather_url(mut self, weather_url: impl Into<String>) -> Self {
        self.weather_url = weather_url.into();
        self
    }

    pub fn with_weather_api_key(mut self, key: Option<String>) -> Self {
        self.weather_api_key = key.filter(|k| !k.trim().is_empty());
        self
    }
}
