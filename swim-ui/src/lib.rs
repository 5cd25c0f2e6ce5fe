//! Shared Dioxus components and Leaflet bridge for the SwimSafe web app.
//!
//! This crate provides:
//! - `map_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `browser`: alerts, new tabs and geolocation through `web-sys`
//! - `state`: reactive `AppState` with Dioxus Signals, plus the derived `Pipeline`
//! - `loader`: the concurrent fetchers that fill `AppState` on mount
//! - `components`: sidebar, info dialogs, planner and small building blocks

pub mod browser;
pub mod components;
pub mod loader;
pub mod map_bridge;
pub mod state;
