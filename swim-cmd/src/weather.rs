//! `weather`: current conditions at a point.

use swim_api::WeatherClient;
use swim_core::geo::{Coordinates, DEFAULT_CENTER};

pub async fn run_weather(client: &WeatherClient, at: Option<Coordinates>) -> anyhow::Result<()> {
    let at = at.unwrap_or(DEFAULT_CENTER);
    let weather = client.current(at).await?;
    let place = weather.name.clone().unwrap_or_else(|| format!("{:.4},{:.4}", at.lat, at.lon));

    let mut line = format!("{}: {}", place, weather.temperature_label());
    if let Some(summary) = weather.summary() {
        line.push_str(&format!(", {}", summary));
    }
    if let Some(wind) = weather.wind_kmh() {
        line.push_str(&format!(", wind {:.0} km/h", wind));
    }
    println!("{}", line);
    Ok(())
}
