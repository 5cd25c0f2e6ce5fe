//! Current-weather lookups by coordinates.

use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::{Client, Url};
use swim_core::geo::Coordinates;
use swim_core::weather::Weather;

/// Client for the OpenWeather current-weather endpoint.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    client: Client,
    url: Url,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder.build()?;
        let url = Url::parse(&config.weather_url)
            .map_err(|e| ApiError::Config(format!("invalid weather URL '{}': {}", config.weather_url, e)))?;
        Ok(Self {
            client,
            url,
            api_key: config.weather_api_key.clone(),
        })
    }

    /// Current weather at `coords`, in metric units.
    ///
    /// # Errors
    ///
    /// [`ApiError::Config`] when no API key is configured; otherwise the
    /// usual transport, status and decode errors.
    pub async fn current(&self, coords: Coordinates) -> Result<Weather, ApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::Config("weather API key is not configured".to_string()))?;

        let lat = coords.lat.to_string();
        let lon = coords.lon.to_string();
        let response = self
            .client
            .get(self.url.clone())
            .query(&[("lat", lat.as_str()), ("lon", lon.as_str()), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Deserialize {
            context: format!("weather at {},{}", lat, lon),
            source,
        })
    }
}
