//! Command implementations for the SwimSafe CLI.
//!
//! Each subcommand drives the same REST client and location pipeline the
//! web app uses, printing plain text (or JSON with `--json`).

use clap::Subcommand;
use swim_api::{ApiConfig, SwimClient, WeatherClient};
use swim_core::filter::{DistanceBucket, ShowOnMap};
use swim_core::geo::Coordinates;
use swim_core::location::{LocationKind, SafetyStatus};

pub mod amenities;
pub mod locations;
pub mod planner;
pub mod weather;

#[derive(Subcommand)]
pub enum Command {
    /// List beaches and rivers, narrowed by search text and filters
    Locations {
        /// Case-insensitive text matched against name and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this water quality tier (safe, caution, unsafe)
        #[arg(long)]
        quality: Option<SafetyStatus>,

        /// Distance bucket from --near (near, moderate, far)
        #[arg(long, requires = "near")]
        distance: Option<DistanceBucket>,

        /// Location kinds to include (all, beaches, rivers)
        #[arg(long, default_value = "all")]
        show: ShowOnMap,

        /// Your position as LAT,LON, used for distances
        #[arg(long, value_parser = parse_coordinates, allow_hyphen_values = true)]
        near: Option<Coordinates>,

        /// Print the visible locations as JSON
        #[arg(long)]
        json: bool,
    },

    /// List public toilets, or show one toilet with its ratings
    Toilets {
        /// Toilet id to show in detail
        id: Option<String>,
    },

    /// Rate a toilet
    RateToilet {
        id: String,

        /// Star rating from 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Whether the toilet was clean
        #[arg(long)]
        clean: bool,

        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// List drinking water fountains, or show one
    Fountains { id: Option<String> },

    /// Current weather at LAT,LON (defaults to the map centre)
    Weather {
        #[arg(value_parser = parse_coordinates, allow_hyphen_values = true)]
        at: Option<Coordinates>,
    },

    /// Look a user up by email
    User { email: String },

    /// Register a visit reminder, creating the user when needed
    Remind {
        #[arg(long)]
        email: String,

        /// beach or river
        #[arg(long)]
        place_type: LocationKind,

        #[arg(long)]
        place_id: String,

        /// Visit date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Visit time as HH:MM
        #[arg(long)]
        time: String,
    },
}

/// Parse `LAT,LON` into coordinates.
pub fn parse_coordinates(raw: &str) -> Result<Coordinates, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{}'", raw))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude '{}': {}", lat, e))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("bad longitude '{}': {}", lon, e))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("coordinates out of range: {},{}", lat, lon));
    }
    Ok(Coordinates::new(lat, lon))
}

pub async fn run(command: Command, config: &ApiConfig) -> anyhow::Result<()> {
    let client = SwimClient::new(config)?;
    log::debug!("API base URL: {}", client.base_url());

    match command {
        Command::Locations {
            search,
            quality,
            distance,
            show,
            near,
            json,
        } => {
            let filters = locations::filters(quality, distance, show);
            locations::run_locations(&client, &filters, &search, near, json).await
        }
        Command::Toilets { id: None } => amenities::run_toilets(&client).await,
        Command::Toilets { id: Some(id) } => amenities::run_toilet_detail(&client, &id).await,
        Command::RateToilet {
            id,
            rating,
            clean,
            comment,
        } => amenities::run_rate_toilet(&client, &id, rating, clean, &comment).await,
        Command::Fountains { id } => amenities::run_fountains(&client, id.as_deref()).await,
        Command::Weather { at } => {
            let weather = WeatherClient::new(config)?;
            weather::run_weather(&weather, at).await
        }
        Command::User { email } => planner::run_user(&client, &email).await,
        Command::Remind {
            email,
            place_type,
            place_id,
            date,
            time,
        } => {
            let form = swim_core::planner::PlannerForm {
                email,
                date,
                time,
                place_type,
                place_id: Some(place_id),
            };
            planner::run_remind(&client, &form).await
        }
    }
}
