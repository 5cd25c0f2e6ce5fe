//! Beach and river records and the normalized `Location`.
//!
//! The API serves beaches and rivers with different field names and
//! different water-quality measures. Both are normalized into a single
//! `Location` shape carrying a derived `SafetyStatus`, so the filter and
//! marker stages never look at source-specific fields.

use crate::geo::Coordinates;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enterococci average (orgs/100mL) at or below which a beach is safe.
const ENTEROCOCCI_SAFE_MAX: f64 = 40.0;
/// Enterococci average at or below which a beach is on alert.
const ENTEROCOCCI_CAUTION_MAX: f64 = 200.0;

/// Accept identifiers sent either as JSON numbers or strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Kind of swimming location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Beach,
    River,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Beach => "beach",
            LocationKind::River => "river",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LocationKind::Beach => "Beach",
            LocationKind::River => "River",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beach" | "beaches" => Ok(LocationKind::Beach),
            "river" | "rivers" => Ok(LocationKind::River),
            other => Err(format!("unknown location kind '{}'", other)),
        }
    }
}

/// Safety tier derived from water-quality measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Caution,
    Unsafe,
    Unknown,
}

impl SafetyStatus {
    /// Tiers a user can filter by.
    pub const SELECTABLE: [SafetyStatus; 3] =
        [SafetyStatus::Safe, SafetyStatus::Caution, SafetyStatus::Unsafe];

    /// Map a published status label onto a tier.
    ///
    /// Accepts the EPA beach modes (Surveillance/Alert/Action), the river
    /// WQI categories and plain tier names.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "safe" | "surveillance" | "excellent" | "good" => SafetyStatus::Safe,
            "caution" | "alert" | "moderate" | "fair" => SafetyStatus::Caution,
            "unsafe" | "action" | "poor" | "very poor" => SafetyStatus::Unsafe,
            _ => SafetyStatus::Unknown,
        }
    }

    /// Tier and EPA mode label for a beach enterococci average.
    pub fn from_enterococci(avg: f64) -> (Self, &'static str) {
        if avg <= ENTEROCOCCI_SAFE_MAX {
            (SafetyStatus::Safe, "Surveillance")
        } else if avg <= ENTEROCOCCI_CAUTION_MAX {
            (SafetyStatus::Caution, "Alert")
        } else {
            (SafetyStatus::Unsafe, "Action")
        }
    }

    /// Tier and category label for a river water quality index (0-100).
    pub fn from_wqi(wqi: f64) -> (Self, &'static str) {
        let label = if wqi >= 80.0 {
            "Excellent"
        } else if wqi >= 70.0 {
            "Good"
        } else if wqi >= 50.0 {
            "Moderate"
        } else if wqi >= 30.0 {
            "Poor"
        } else {
            "Very Poor"
        };
        (Self::from_label(label), label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "safe",
            SafetyStatus::Caution => "caution",
            SafetyStatus::Unsafe => "unsafe",
            SafetyStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "Safe",
            SafetyStatus::Caution => "Caution",
            SafetyStatus::Unsafe => "Unsafe",
            SafetyStatus::Unknown => "Unknown",
        }
    }

    /// One-line swimming advice shown next to the status badge.
    pub fn advice(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "You can swim today",
            SafetyStatus::Caution => "Swim with caution",
            SafetyStatus::Unsafe => "Avoid swimming today",
            SafetyStatus::Unknown => "No recent water quality data",
        }
    }

    /// Badge / marker colour.
    pub fn color(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "#2E7D32",
            SafetyStatus::Caution => "#F9A825",
            SafetyStatus::Unsafe => "#C62828",
            SafetyStatus::Unknown => "#757575",
        }
    }
}

impl FromStr for SafetyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SafetyStatus::from_label(s) {
            SafetyStatus::Unknown if !s.trim().eq_ignore_ascii_case("unknown") => {
                Err(format!("unknown water quality tier '{}'", s))
            }
            status => Ok(status),
        }
    }
}

/// Beach record as served by `GET /beaches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeachRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default, alias = "lng")]
    pub lon: Option<f64>,
    /// Average enterococci over the latest samples (orgs/100mL).
    #[serde(default)]
    pub avg_enterococci: Option<f64>,
    #[serde(default, alias = "description")]
    pub description_tips: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "sample_date")]
    pub last_tested: Option<String>,
}

/// Model prediction attached to a river record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverPrediction {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub wqi: Option<f64>,
}

/// River record as served by `GET /rivers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default, alias = "lng")]
    pub lon: Option<f64>,
    #[serde(default)]
    pub predicted: Option<RiverPrediction>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "sample_date")]
    pub last_tested: Option<String>,
}

/// Identity of a location: kind plus source id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationKey {
    pub kind: LocationKind,
    pub id: String,
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// A beach or river in the uniform shape used by search, filters and markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub kind: LocationKind,
    /// `None` when the source record had no usable coordinates.
    pub coordinates: Option<Coordinates>,
    pub status: SafetyStatus,
    /// Published label behind the status, e.g. "Surveillance" or "Excellent".
    pub status_label: String,
    pub description: String,
    pub last_tested: Option<String>,
    /// Distance from the user, once their position is known.
    pub distance_km: Option<f64>,
}

impl Location {
    pub fn key(&self) -> LocationKey {
        LocationKey {
            kind: self.kind,
            id: self.id.clone(),
        }
    }

    pub fn distance_label(&self) -> Option<String> {
        self.distance_km.map(crate::geo::format_distance)
    }
}

fn fallback_status(status: Option<&str>) -> (SafetyStatus, String) {
    match status {
        Some(label) if !label.trim().is_empty() => {
            (SafetyStatus::from_label(label), label.trim().to_string())
        }
        _ => (SafetyStatus::Unknown, SafetyStatus::Unknown.display_name().to_string()),
    }
}

impl From<BeachRecord> for Location {
    fn from(record: BeachRecord) -> Self {
        let (status, status_label) = match record.avg_enterococci {
            Some(avg) if avg.is_finite() => {
                let (status, label) = SafetyStatus::from_enterococci(avg);
                (status, label.to_string())
            }
            _ => fallback_status(record.status.as_deref()),
        };
        Location {
            id: record.id,
            name: record.name,
            kind: LocationKind::Beach,
            coordinates: Coordinates::from_parts(record.lat, record.lon),
            status,
            status_label,
            description: record.description_tips.unwrap_or_default(),
            last_tested: record.last_tested,
            distance_km: None,
        }
    }
}

impl From<RiverRecord> for Location {
    fn from(record: RiverRecord) -> Self {
        let predicted = record.predicted.as_ref();
        let category = predicted.and_then(|p| p.category.as_deref());
        let wqi = predicted.and_then(|p| p.wqi).filter(|w| w.is_finite());

        let (status, status_label) = match (category, wqi) {
            (Some(category), _) if !category.trim().is_empty() => (
                SafetyStatus::from_label(category),
                category.trim().to_string(),
            ),
            (_, Some(wqi)) => {
                let (status, label) = SafetyStatus::from_wqi(wqi);
                (status, label.to_string())
            }
            _ => fallback_status(record.status.as_deref()),
        };
        Location {
            id: record.id,
            name: record.name,
            kind: LocationKind::River,
            coordinates: Coordinates::from_parts(record.lat, record.lon),
            status,
            status_label,
            description: record.description.unwrap_or_default(),
            last_tested: record.last_tested,
            distance_km: None,
        }
    }
}

/// Normalize a batch of beach records.
pub fn normalize_beaches(records: Vec<BeachRecord>) -> Vec<Location> {
    let locations: Vec<Location> = records.into_iter().map(Location::from).collect();
    log::debug!("normalized {} beaches", locations.len());
    locations
}

/// Normalize a batch of river records.
pub fn normalize_rivers(records: Vec<RiverRecord>) -> Vec<Location> {
    let locations: Vec<Location> = records.into_iter().map(Location::from).collect();
    log::debug!("normalized {} rivers", locations.len());
    locations
}

/// Combine beaches and rivers into one list and attach distances from `origin`.
///
/// Locations without coordinates, or every location when `origin` is
/// `None`, get `distance_km = None`.
pub fn combine(beaches: &[Location], rivers: &[Location], origin: Option<Coordinates>) -> Vec<Location> {
    beaches
        .iter()
        .chain(rivers.iter())
        .map(|location| {
            let mut location = location.clone();
            location.distance_km = match (origin, location.coordinates) {
                (Some(from), Some(to)) => Some(from.distance_km(&to)),
                _ => None,
            };
            location
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_beach_from_json() {
        let record: BeachRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Test Beach",
            "lat": -37.8679,
            "lon": 144.9740,
            "avg_enterococci": 100,
            "description_tips": "Clean beach"
        }))
        .unwrap();
        let location = Location::from(record);

        assert_eq!(location.id, "1");
        assert_eq!(location.kind, LocationKind::Beach);
        assert_eq!(location.status, SafetyStatus::Caution);
        assert_eq!(location.status_label, "Alert");
        assert_eq!(location.description, "Clean beach");
        assert_eq!(location.coordinates, Some(Coordinates::new(-37.8679, 144.9740)));
        assert_eq!(location.key().to_string(), "beach:1");
    }

    #[test]
    fn test_null_name_reads_as_empty() {
        let record: BeachRecord = serde_json::from_value(json!({
            "id": 2,
            "name": null,
            "lat": null,
            "lon": 144.97
        }))
        .unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.lat, None);

        let record: RiverRecord = serde_json::from_value(json!({ "id": "r1", "name": null })).unwrap();
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_enterococci_thresholds() {
        assert_eq!(SafetyStatus::from_enterococci(40.0).0, SafetyStatus::Safe);
        assert_eq!(SafetyStatus::from_enterococci(40.5).0, SafetyStatus::Caution);
        assert_eq!(SafetyStatus::from_enterococci(200.0).0, SafetyStatus::Caution);
        assert_eq!(SafetyStatus::from_enterococci(201.0), (SafetyStatus::Unsafe, "Action"));
    }

    #[test]
    fn test_river_prefers_category_over_wqi() {
        let record: RiverRecord = serde_json::from_value(json!({
            "id": "yarra-1",
            "name": "Test River",
            "lat": -37.8,
            "lon": 144.9,
            "predicted": { "category": "Excellent", "wqi": 10 },
            "description": "A safe river"
        }))
        .unwrap();
        let location = Location::from(record);
        assert_eq!(location.status, SafetyStatus::Safe);
        assert_eq!(location.status_label, "Excellent");
        assert_eq!(location.kind, LocationKind::River);
    }

    #[test]
    fn test_river_wqi_bands() {
        assert_eq!(SafetyStatus::from_wqi(95.0), (SafetyStatus::Safe, "Excellent"));
        assert_eq!(SafetyStatus::from_wqi(72.0), (SafetyStatus::Safe, "Good"));
        assert_eq!(SafetyStatus::from_wqi(50.0), (SafetyStatus::Caution, "Moderate"));
        assert_eq!(SafetyStatus::from_wqi(35.0), (SafetyStatus::Unsafe, "Poor"));
        assert_eq!(SafetyStatus::from_wqi(5.0), (SafetyStatus::Unsafe, "Very Poor"));
    }

    #[test]
    fn test_status_label_fallback() {
        let record: RiverRecord = serde_json::from_value(json!({
            "id": 2,
            "name": "City River",
            "status": "Good"
        }))
        .unwrap();
        let location = Location::from(record);
        assert_eq!(location.status, SafetyStatus::Safe);
        assert_eq!(location.status_label, "Good");

        let record: BeachRecord =
            serde_json::from_value(json!({ "id": 3, "name": "Mystery Beach" })).unwrap();
        let location = Location::from(record);
        assert_eq!(location.status, SafetyStatus::Unknown);
    }

    #[test]
    fn test_missing_coordinates_pass_through() {
        let record: BeachRecord = serde_json::from_value(json!({
            "id": 4,
            "name": "Half Beach",
            "lat": -37.9,
            "lon": null
        }))
        .unwrap();
        let location = Location::from(record);
        assert!(location.coordinates.is_none());
    }

    #[test]
    fn test_combine_sets_distances() {
        let beaches = normalize_beaches(vec![BeachRecord {
            id: "1".into(),
            name: "St Kilda Beach".into(),
            lat: Some(-37.8676),
            lon: Some(144.9809),
            avg_enterococci: Some(10.0),
            description_tips: None,
            status: None,
            last_tested: None,
        }]);
        let rivers = normalize_rivers(vec![RiverRecord {
            id: "2".into(),
            name: "Nowhere Creek".into(),
            lat: None,
            lon: None,
            predicted: None,
            description: None,
            status: None,
            last_tested: None,
        }]);

        let combined = combine(&beaches, &rivers, Some(crate::geo::DEFAULT_CENTER));
        assert_eq!(combined.len(), 2);
        assert!(combined[0].distance_km.is_some());
        assert!(combined[1].distance_km.is_none());

        let without_origin = combine(&beaches, &rivers, None);
        assert!(without_origin.iter().all(|l| l.distance_km.is_none()));
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("safe".parse::<SafetyStatus>(), Ok(SafetyStatus::Safe));
        assert_eq!("Unsafe".parse::<SafetyStatus>(), Ok(SafetyStatus::Unsafe));
        assert!("muddy".parse::<SafetyStatus>().is_err());
        assert_eq!("rivers".parse::<LocationKind>(), Ok(LocationKind::River));
    }
}
