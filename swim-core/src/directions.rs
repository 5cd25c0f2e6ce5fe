//! Directions to a selected place.

use crate::geo::Coordinates;
use thiserror::Error;

const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    #[error("No coordinates available for this location.")]
    MissingCoordinates,
}

/// Anything the user can ask directions to.
///
/// Implementors only expose where they are; the URL is built here so every
/// marker, dialog and CLI command agrees on the format.
pub trait Destination {
    fn coordinates(&self) -> Option<Coordinates>;

    /// Optional provider place id appended to the directions link.
    fn place_id(&self) -> Option<&str> {
        None
    }

    fn directions_url(&self) -> Result<String, DirectionsError> {
        let coords = self.coordinates().ok_or(DirectionsError::MissingCoordinates)?;
        let mut url = format!("{}&destination={},{}", DIRECTIONS_BASE_URL, coords.lat, coords.lon);
        if let Some(place_id) = self.place_id() {
            url.push_str("&destination_place_id=");
            url.push_str(place_id);
        }
        Ok(url)
    }
}

impl Destination for crate::location::Location {
    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    fn place_id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Location, LocationKind, SafetyStatus};

    fn st_kilda() -> Location {
        Location {
            id: "place_id_123".to_string(),
            name: "St Kilda Beach".to_string(),
            kind: LocationKind::Beach,
            coordinates: Some(Coordinates::new(-37.8676, 144.9809)),
            status: SafetyStatus::Safe,
            status_label: "Surveillance".to_string(),
            description: "Popular beach near Melbourne.".to_string(),
            last_tested: Some("2023-10-05".to_string()),
            distance_km: Some(5.4),
        }
    }

    #[test]
    fn test_location_directions_url() {
        assert_eq!(
            st_kilda().directions_url().unwrap(),
            "https://www.google.com/maps/dir/?api=1&destination=-37.8676,144.9809&destination_place_id=place_id_123"
        );
    }

    #[test]
    fn test_missing_coordinates_is_an_error() {
        let location = Location {
            coordinates: None,
            ..st_kilda()
        };
        let err = location.directions_url().unwrap_err();
        assert_eq!(err, DirectionsError::MissingCoordinates);
        assert_eq!(err.to_string(), "No coordinates available for this location.");
    }
}
