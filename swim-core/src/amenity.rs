//! Toilets, water fountains and toilet ratings.

use crate::directions::Destination;
use crate::geo::Coordinates;
use crate::location::{deserialize_id, null_as_default};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest star rating a user can give.
pub const MAX_RATING: u8 = 5;

/// Public toilet as served by `GET /toilets` and `GET /toilets/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toilet {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "name", deserialize_with = "null_as_default")]
    pub toilet_name: String,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub male: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub female: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unisex: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub accessible: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_gender: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub baby_change: bool,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default, alias = "lng")]
    pub lon: Option<f64>,
}

impl Toilet {
    pub fn display_name(&self) -> &str {
        if self.toilet_name.trim().is_empty() {
            "Public toilet"
        } else {
            &self.toilet_name
        }
    }

    /// Facility labels paired with availability, in display order.
    pub fn facilities(&self) -> [(&'static str, bool); 6] {
        [
            ("Male", self.male),
            ("Female", self.female),
            ("Unisex", self.unisex),
            ("Accessible", self.accessible),
            ("All gender", self.all_gender),
            ("Baby change", self.baby_change),
        ]
    }
}

impl Destination for Toilet {
    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.lat, self.lon)
    }
}

/// Drinking water fountain as served by `GET /water-fountains`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterFountain {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default, alias = "lng")]
    pub lon: Option<f64>,
}

impl WaterFountain {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.description.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Water fountain")
    }
}

impl Destination for WaterFountain {
    fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.lat, self.lon)
    }
}

/// Response of `GET /toilet-ratings/average/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToiletAverage {
    #[serde(deserialize_with = "deserialize_id")]
    pub toilet_id: String,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl ToiletAverage {
    /// The "no ratings yet" value used when the lookup fails.
    pub fn unrated(toilet_id: &str) -> Self {
        Self {
            toilet_id: toilet_id.to_string(),
            average_rating: None,
        }
    }
}

/// One entry of `GET /toilet-ratings/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToiletComment {
    #[serde(deserialize_with = "deserialize_id")]
    pub toilet_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub is_clean: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ToiletComment {
    /// Posting date for display, e.g. `8 Oct 2023`.
    pub fn posted_label(&self) -> Option<String> {
        self.created_at.map(|ts| ts.format("%-d %b %Y").to_string())
    }
}

/// Timestamps arrive as RFC 3339 or as naive `YYYY-MM-DD HH:MM:SS` in UTC.
/// Anything else is dropped rather than failing the whole comment list.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|ts| ts.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").map(|ts| ts.and_utc())
            })
            .ok()
    }))
}

/// Everything the toilet panel shows: the toilet, its average and its comments.
#[derive(Debug, Clone, PartialEq)]
pub struct ToiletDetail {
    pub toilet: Toilet,
    pub average: ToiletAverage,
    pub comments: Vec<ToiletComment>,
}

impl ToiletDetail {
    /// Build the detail view, keeping only the comments about this toilet.
    ///
    /// The latest-comments endpoint covers every toilet, newest first.
    pub fn new(toilet: Toilet, average: ToiletAverage, latest: Vec<ToiletComment>) -> Self {
        let comments = latest
            .into_iter()
            .filter(|c| c.toilet_id == toilet.id && !c.comment.trim().is_empty())
            .collect();
        Self {
            toilet,
            average,
            comments,
        }
    }

    pub fn average_label(&self) -> String {
        match self.average.average_rating {
            Some(avg) => format!("{:.1} / {}", avg, MAX_RATING),
            None => "No ratings yet".to_string(),
        }
    }
}

/// Payload of `POST /toilet-ratings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToiletRating {
    pub toilet_id: String,
    pub is_clean: bool,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingFormError {
    #[error("Please tell us whether the toilet was clean.")]
    MissingCleanliness,
    #[error("Please choose a rating from 1 to 5 stars.")]
    MissingRating,
}

/// The in-progress rating form of the toilet panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingForm {
    pub is_clean: Option<bool>,
    pub rating: Option<u8>,
    pub comment: String,
}

impl RatingForm {
    /// Set the star rating, clamped to 1..=5.
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = Some(stars.clamp(1, MAX_RATING));
    }

    /// Validate the form into the payload for `toilet_id`.
    pub fn build(&self, toilet_id: &str) -> Result<ToiletRating, RatingFormError> {
        let is_clean = self.is_clean.ok_or(RatingFormError::MissingCleanliness)?;
        let rating = self
            .rating
            .filter(|r| (1..=MAX_RATING).contains(r))
            .ok_or(RatingFormError::MissingRating)?;
        Ok(ToiletRating {
            toilet_id: toilet_id.to_string(),
            is_clean,
            rating,
            comment: self.comment.trim().to_string(),
        })
    }
}

/// Result of a rating submission. Failures are reported, never raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

impl SubmitOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn toilet() -> Toilet {
        serde_json::from_value(json!({
            "id": 1,
            "toilet_name": "Test Toilet",
            "opening_hours": "6am - 10pm",
            "male": true,
            "female": true,
            "accessible": true,
            "lat": -37.86,
            "lon": 144.97
        }))
        .unwrap()
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let toilet: Toilet = serde_json::from_value(json!({
            "id": 3,
            "toilet_name": null,
            "male": null,
            "accessible": true
        }))
        .unwrap();
        assert_eq!(toilet.display_name(), "Public toilet");
        assert!(!toilet.male);
        assert!(toilet.accessible);

        let comment: ToiletComment =
            serde_json::from_value(json!({ "toilet_id": 3, "comment": null, "rating": 4 })).unwrap();
        assert_eq!(comment.comment, "");
        assert_eq!(comment.rating, Some(4));
    }

    #[test]
    fn test_rating_payload_has_exactly_four_fields() {
        let mut form = RatingForm::default();
        form.is_clean = Some(false);
        form.set_rating(3);
        form.comment = "Great toilet!".to_string();

        let payload = form.build("1").unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "toilet_id": "1",
                "is_clean": false,
                "rating": 3,
                "comment": "Great toilet!"
            })
        );
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_rating_form_validation() {
        let mut form = RatingForm::default();
        assert_eq!(form.build("1"), Err(RatingFormError::MissingCleanliness));
        form.is_clean = Some(true);
        assert_eq!(form.build("1"), Err(RatingFormError::MissingRating));
        form.set_rating(9);
        assert_eq!(form.rating, Some(5));
        assert!(form.build("1").is_ok());
    }

    #[test]
    fn test_detail_keeps_own_comments() {
        let latest: Vec<ToiletComment> = serde_json::from_value(json!([
            { "toilet_id": 1, "comment": "Nice and clean!", "created_at": "2023-10-08T10:00:00Z" },
            { "toilet_id": 2, "comment": "Elsewhere", "created_at": "yesterday" },
            { "toilet_id": "1", "comment": "  " }
        ]))
        .unwrap();
        let detail = ToiletDetail::new(toilet(), ToiletAverage::unrated("1"), latest);
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].comment, "Nice and clean!");
        assert_eq!(detail.comments[0].posted_label().as_deref(), Some("8 Oct 2023"));
        assert_eq!(detail.average_label(), "No ratings yet");
    }

    #[test]
    fn test_average_label() {
        let detail = ToiletDetail::new(
            toilet(),
            ToiletAverage {
                toilet_id: "1".into(),
                average_rating: Some(4.2),
            },
            Vec::new(),
        );
        assert_eq!(detail.average_label(), "4.2 / 5");
    }

    #[test]
    fn test_amenity_directions() {
        let url = toilet().directions_url().unwrap();
        assert_eq!(url, "https://www.google.com/maps/dir/?api=1&destination=-37.86,144.97");

        let fountain: WaterFountain = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert!(fountain.directions_url().is_err());
        assert_eq!(fountain.display_name(), "Water fountain");
    }

    #[test]
    fn test_submit_outcome_defaults_to_success() {
        let outcome: SubmitOutcome = serde_json::from_value(json!({ "message": "created" })).unwrap();
        assert_eq!(outcome, SubmitOutcome::ok());
        assert!(!SubmitOutcome::failed("boom").success);
    }
}
