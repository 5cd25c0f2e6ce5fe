//! Core types and the location pipeline for SwimSafe.
//!
//! - `location`: raw beach/river records and the normalized `Location`
//! - `filter`: `FilterState`, search and the visible-subset combinator
//! - `geo`: coordinates and great-circle distances
//! - `directions`: the directions capability shared by every selectable record
//! - `amenity`: toilets, water fountains and toilet ratings
//! - `marker`: map markers and marker-click selection
//! - `planner`: visit planner form, users and notifications
//! - `weather`: current weather by coordinates

pub mod amenity;
pub mod directions;
pub mod filter;
pub mod geo;
pub mod location;
pub mod marker;
pub mod planner;
pub mod weather;
