//! HTTP clients for the SwimSafe REST API and the weather service.
//!
//! Compiles for both the browser (WASM, `fetch` under the hood) and native
//! targets. Read endpoints return `Result`s; callers that must keep the UI
//! usable convert failures with [`Degrade`].

mod client;
pub mod config;
mod degrade;
pub mod error;
mod planner;
mod weather;

pub use client::SwimClient;
pub use config::ApiConfig;
pub use degrade::Degrade;
pub use error::ApiError;
pub use weather::WeatherClient;
