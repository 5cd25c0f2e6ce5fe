//! Search and filter combinator.
//!
//! `apply` narrows the full location list to the visible subset by
//! intersecting a text search with the active `FilterState`. Amenity
//! toggles never remove locations; they only switch amenity marker layers
//! on and off (see [`FilterState::shows_amenity`]).

use crate::location::{Location, LocationKind, SafetyStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Maximum number of search suggestions offered under the search box.
pub const MAX_SUGGESTIONS: usize = 8;

/// Message shown when the visible subset is empty.
pub const NO_RESULTS_MESSAGE: &str = "No results match your filters or search.";

/// Distance from the user, bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceBucket {
    /// Under 5 km.
    Near,
    /// 5 km up to 15 km.
    Moderate,
    /// 15 km and beyond.
    Far,
}

impl DistanceBucket {
    pub const ALL: [DistanceBucket; 3] =
        [DistanceBucket::Near, DistanceBucket::Moderate, DistanceBucket::Far];

    pub fn contains(&self, km: f64) -> bool {
        match self {
            DistanceBucket::Near => km < 5.0,
            DistanceBucket::Moderate => (5.0..15.0).contains(&km),
            DistanceBucket::Far => km >= 15.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceBucket::Near => "< 5 km",
            DistanceBucket::Moderate => "5-15 km",
            DistanceBucket::Far => "15+ km",
        }
    }
}

impl FromStr for DistanceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "near" => Ok(DistanceBucket::Near),
            "moderate" => Ok(DistanceBucket::Moderate),
            "far" => Ok(DistanceBucket::Far),
            other => Err(format!("unknown distance bucket '{}'", other)),
        }
    }
}

/// Amenity layers that can be toggled on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Toilets,
    Fountains,
}

impl Amenity {
    pub const ALL: [Amenity; 2] = [Amenity::Toilets, Amenity::Fountains];

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Toilets => "Toilets",
            Amenity::Fountains => "Water Fountains",
        }
    }
}

/// Which kinds of location are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowOnMap {
    #[default]
    All,
    Beaches,
    Rivers,
}

impl ShowOnMap {
    pub const ALL: [ShowOnMap; 3] = [ShowOnMap::All, ShowOnMap::Beaches, ShowOnMap::Rivers];

    pub fn includes(&self, kind: LocationKind) -> bool {
        match self {
            ShowOnMap::All => true,
            ShowOnMap::Beaches => kind == LocationKind::Beach,
            ShowOnMap::Rivers => kind == LocationKind::River,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShowOnMap::All => "All",
            ShowOnMap::Beaches => "Beaches",
            ShowOnMap::Rivers => "Rivers",
        }
    }
}

impl FromStr for ShowOnMap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ShowOnMap::All),
            "beach" | "beaches" => Ok(ShowOnMap::Beaches),
            "river" | "rivers" => Ok(ShowOnMap::Rivers),
            other => Err(format!("unknown map scope '{}'", other)),
        }
    }
}

/// User-selected constraints on the visible locations.
///
/// The default value applies no filtering at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub water_quality: Option<SafetyStatus>,
    pub distance: Option<DistanceBucket>,
    pub amenities: BTreeSet<Amenity>,
    pub show_on_map: ShowOnMap,
}

impl FilterState {
    /// Restore the defaults.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Select `tier`, or clear it when it is already selected.
    pub fn toggle_water_quality(&mut self, tier: SafetyStatus) {
        self.water_quality = if self.water_quality == Some(tier) {
            None
        } else {
            Some(tier)
        };
    }

    /// Select `bucket`, or clear it when it is already selected.
    pub fn toggle_distance(&mut self, bucket: DistanceBucket) {
        self.distance = if self.distance == Some(bucket) {
            None
        } else {
            Some(bucket)
        };
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.remove(&amenity) {
            self.amenities.insert(amenity);
        }
    }

    pub fn shows_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }

    /// Whether `location` passes every location predicate.
    pub fn matches(&self, location: &Location) -> bool {
        if !self.show_on_map.includes(location.kind) {
            return false;
        }
        if let Some(tier) = self.water_quality {
            if location.status != tier {
                return false;
            }
        }
        if let Some(bucket) = self.distance {
            match location.distance_km {
                Some(km) if bucket.contains(km) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Case-insensitive substring match of `query` against name or description.
///
/// An empty or whitespace-only query matches everything.
pub fn matches_search(location: &Location, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    location.name.to_lowercase().contains(&needle)
        || location.description.to_lowercase().contains(&needle)
}

/// The visible subset of `locations`, in input order.
pub fn apply(locations: &[Location], filters: &FilterState, query: &str) -> Vec<Location> {
    locations
        .iter()
        .filter(|location| filters.matches(location) && matches_search(location, query))
        .cloned()
        .collect()
}

/// Result of running the combinator, with an explicit empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Matches(Vec<Location>),
    NoResults,
}

impl FilterOutcome {
    pub fn from_visible(visible: Vec<Location>) -> Self {
        if visible.is_empty() {
            FilterOutcome::NoResults
        } else {
            FilterOutcome::Matches(visible)
        }
    }

    pub fn locations(&self) -> &[Location] {
        match self {
            FilterOutcome::Matches(locations) => locations,
            FilterOutcome::NoResults => &[],
        }
    }
}

/// Search suggestions for the sidebar.
///
/// Returns `None` while the query is empty (no suggestion list shown),
/// otherwise the first [`MAX_SUGGESTIONS`] visible locations matching it.
pub fn suggestions(visible: &[Location], query: &str) -> Option<FilterOutcome> {
    if query.trim().is_empty() {
        return None;
    }
    let matches: Vec<Location> = visible
        .iter()
        .filter(|location| matches_search(location, query))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();
    Some(FilterOutcome::from_visible(matches))
}
