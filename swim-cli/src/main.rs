//! SwimSafe CLI - query swimming locations, amenities and weather, rate
//! toilets and schedule visit reminders from a terminal.

use clap::Parser;
use std::time::Duration;
use swim_api::config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_WEATHER_URL};

#[derive(Parser)]
#[command(
    name = "swim-cli",
    version,
    about = "SwimSafe swimming locations toolkit"
)]
struct Cli {
    /// Root of the SwimSafe REST API
    #[arg(long, env = "SWIM_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "SWIM_API_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS, global = true)]
    timeout_ms: u64,

    #[arg(long, env = "OPENWEATHER_URL", default_value = DEFAULT_WEATHER_URL, global = true)]
    weather_url: String,

    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, global = true)]
    weather_key: Option<String>,

    #[command(subcommand)]
    command: swim_cmd::Command,
}

impl Cli {
    fn api_config(&self) -> ApiConfig {
        ApiConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_weather_url(self.weather_url.clone())
            .with_weather_api_key(self.weather_key.clone())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.api_config();
    log::debug!("Using API at {}", config.base_url);
    swim_cmd::run(cli.command, &config).await
}
