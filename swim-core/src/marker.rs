//! Map markers and marker-click selection.
//!
//! Markers are plain serializable values handed to the map bridge as JSON.
//! A click comes back as the marker key string, which [`resolve`] turns into
//! the full record behind it.

use crate::amenity::{Toilet, WaterFountain};
use crate::directions::{Destination, DirectionsError};
use crate::filter::{Amenity, FilterState};
use crate::geo::Coordinates;
use crate::location::{Location, LocationKind};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const TOILET_COLOR: &str = "#6A1B9A";
const FOUNTAIN_COLOR: &str = "#0277BD";

/// Map layer a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerLayer {
    Beach,
    River,
    Toilet,
    Fountain,
}

impl MarkerLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerLayer::Beach => "beach",
            MarkerLayer::River => "river",
            MarkerLayer::Toilet => "toilet",
            MarkerLayer::Fountain => "fountain",
        }
    }
}

impl From<LocationKind> for MarkerLayer {
    fn from(kind: LocationKind) -> Self {
        match kind {
            LocationKind::Beach => MarkerLayer::Beach,
            LocationKind::River => MarkerLayer::River,
        }
    }
}

/// Stable marker identity, rendered as `layer:id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerKey {
    pub layer: MarkerLayer,
    pub id: String,
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.layer.as_str(), self.id)
    }
}

impl FromStr for MarkerKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (layer, id) = s
            .split_once(':')
            .ok_or_else(|| format!("malformed marker key '{}'", s))?;
        let layer = match layer {
            "beach" => MarkerLayer::Beach,
            "river" => MarkerLayer::River,
            "toilet" => MarkerLayer::Toilet,
            "fountain" => MarkerLayer::Fountain,
            other => return Err(format!("unknown marker layer '{}'", other)),
        };
        if id.is_empty() {
            return Err(format!("marker key '{}' has no id", s));
        }
        Ok(MarkerKey {
            layer,
            id: id.to_string(),
        })
    }
}

/// A single marker as the map bridge expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub key: String,
    pub layer: MarkerLayer,
    pub lat: f64,
    pub lon: f64,
    pub title: String,
    pub color: &'static str,
}

impl MapMarker {
    fn new(layer: MarkerLayer, id: &str, coords: Coordinates, title: &str, color: &'static str) -> Self {
        MapMarker {
            key: MarkerKey {
                layer,
                id: id.to_string(),
            }
            .to_string(),
            layer,
            lat: coords.lat,
            lon: coords.lon,
            title: title.to_string(),
            color,
        }
    }
}

/// Markers for the visible locations plus the amenity layers switched on.
///
/// Records without coordinates cannot be placed and are skipped here; they
/// stay reachable through the result list and search suggestions.
pub fn build_markers(
    visible: &[Location],
    toilets: &[Toilet],
    fountains: &[WaterFountain],
    filters: &FilterState,
) -> Vec<MapMarker> {
    let mut markers: Vec<MapMarker> = visible
        .iter()
        .filter_map(|location| {
            location.coordinates.map(|coords| {
                MapMarker::new(
                    location.kind.into(),
                    &location.id,
                    coords,
                    &location.name,
                    location.status.color(),
                )
            })
        })
        .collect();

    if filters.shows_amenity(Amenity::Toilets) {
        markers.extend(toilets.iter().filter_map(|toilet| {
            toilet.coordinates().map(|coords| {
                MapMarker::new(MarkerLayer::Toilet, &toilet.id, coords, toilet.display_name(), TOILET_COLOR)
            })
        }));
    }
    if filters.shows_amenity(Amenity::Fountains) {
        markers.extend(fountains.iter().filter_map(|fountain| {
            fountain.coordinates().map(|coords| {
                MapMarker::new(
                    MarkerLayer::Fountain,
                    &fountain.id,
                    coords,
                    fountain.display_name(),
                    FOUNTAIN_COLOR,
                )
            })
        }));
    }
    markers
}

/// The record behind a clicked marker or chosen suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Location(Location),
    Toilet(Toilet),
    Fountain(WaterFountain),
}

impl Selection {
    pub fn title(&self) -> &str {
        match self {
            Selection::Location(location) => &location.name,
            Selection::Toilet(toilet) => toilet.display_name(),
            Selection::Fountain(fountain) => fountain.display_name(),
        }
    }

    pub fn directions_url(&self) -> Result<String, DirectionsError> {
        match self {
            Selection::Location(location) => location.directions_url(),
            Selection::Toilet(toilet) => toilet.directions_url(),
            Selection::Fountain(fountain) => fountain.directions_url(),
        }
    }
}

/// Resolve a marker key against the currently loaded records.
pub fn resolve(
    key: &MarkerKey,
    locations: &[Location],
    toilets: &[Toilet],
    fountains: &[WaterFountain],
) -> Option<Selection> {
    match key.layer {
        MarkerLayer::Beach | MarkerLayer::River => locations
            .iter()
            .find(|l| MarkerLayer::from(l.kind) == key.layer && l.id == key.id)
            .cloned()
            .map(Selection::Location),
        MarkerLayer::Toilet => toilets
            .iter()
            .find(|t| t.id == key.id)
            .cloned()
            .map(Selection::Toilet),
        MarkerLayer::Fountain => fountains
            .iter()
            .find(|f| f.id == key.id)
            .cloned()
            .map(Selection::Fountain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::SafetyStatus;

    fn beach(id: &str, coords: Option<Coordinates>) -> Location {
        Location {
            id: id.to_string(),
            name: format!("Beach {}", id),
            kind: LocationKind::Beach,
            coordinates: coords,
            status: SafetyStatus::Safe,
            status_label: "Surveillance".to_string(),
            description: String::new(),
            last_tested: None,
            distance_km: None,
        }
    }

    fn toilet(id: &str) -> Toilet {
        serde_json::from_value(serde_json::json!({
            "id": id, "toilet_name": "Loo", "lat": -37.86, "lon": 144.97
        }))
        .unwrap()
    }

    fn fountain(id: &str) -> WaterFountain {
        serde_json::from_value(serde_json::json!({ "id": id, "lat": -37.85, "lon": 144.96 })).unwrap()
    }

    #[test]
    fn test_marker_key_round_trip() {
        let key: MarkerKey = "toilet:42".parse().unwrap();
        assert_eq!(key.layer, MarkerLayer::Toilet);
        assert_eq!(key.id, "42");
        assert_eq!(key.to_string(), "toilet:42");
        assert!("boat:1".parse::<MarkerKey>().is_err());
        assert!("beach".parse::<MarkerKey>().is_err());
        assert!("beach:".parse::<MarkerKey>().is_err());
    }

    #[test]
    fn test_amenity_layers_follow_toggles() {
        let visible = vec![beach("1", Some(Coordinates::new(-37.8, 144.9))), beach("2", None)];
        let toilets = vec![toilet("3")];
        let fountains = vec![fountain("4")];

        let mut filters = FilterState::default();
        let markers = build_markers(&visible, &toilets, &fountains, &filters);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].key, "beach:1");
        assert_eq!(markers[0].color, SafetyStatus::Safe.color());

        filters.toggle_amenity(Amenity::Toilets);
        filters.toggle_amenity(Amenity::Fountains);
        let keys: Vec<String> = build_markers(&visible, &toilets, &fountains, &filters)
            .into_iter()
            .map(|m| m.key)
            .collect();
        assert_eq!(keys, vec!["beach:1", "toilet:3", "fountain:4"]);
    }

    #[test]
    fn test_resolve_selection() {
        let locations = vec![beach("1", Some(Coordinates::new(-37.8, 144.9)))];
        let toilets = vec![toilet("1")];
        let fountains = vec![fountain("1")];

        let selection = resolve(&"beach:1".parse().unwrap(), &locations, &toilets, &fountains).unwrap();
        assert_eq!(selection.title(), "Beach 1");
        assert!(selection.directions_url().unwrap().contains("destination_place_id=1"));

        match resolve(&"toilet:1".parse().unwrap(), &locations, &toilets, &fountains) {
            Some(Selection::Toilet(t)) => assert_eq!(t.toilet_name, "Loo"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(resolve(&"river:1".parse().unwrap(), &locations, &toilets, &fountains).is_none());
        assert!(resolve(&"fountain:9".parse().unwrap(), &locations, &toilets, &fountains).is_none());
    }
}
