//! Visit planner: users, reminder notifications and the planner form.

use crate::location::{deserialize_id, LocationKey, LocationKind};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registered user as served by `/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
}

/// Payload of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
}

/// Payload of `POST /notifications`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationRequest {
    pub user_id: String,
    pub place_type: LocationKind,
    pub place_id: String,
    /// `YYYY-MM-DD`
    pub visit_date: String,
    /// `HH:MM`
    pub visit_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please choose a valid date.")]
    InvalidDate,
    #[error("Please choose a valid time.")]
    InvalidTime,
    #[error("Please choose a location.")]
    MissingPlace,
}

/// The planner dialog's inputs, kept as raw strings the way the inputs produce them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerForm {
    pub email: String,
    pub date: String,
    pub time: String,
    pub place_type: LocationKind,
    pub place_id: Option<String>,
}

impl PlannerForm {
    /// A form pre-filled for `place`, or for a beach when opened from the header.
    pub fn new(place: Option<LocationKey>) -> Self {
        let (place_type, place_id) = match place {
            Some(key) => (key.kind, Some(key.id)),
            None => (LocationKind::Beach, None),
        };
        Self {
            email: String::new(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            time: String::new(),
            place_type,
            place_id,
        }
    }

    /// Switch the place type, dropping a place of the other kind.
    pub fn set_place_type(&mut self, kind: LocationKind) {
        if kind != self.place_type {
            self.place_type = kind;
            self.place_id = None;
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<PlannedVisit, PlannerError> {
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(PlannerError::InvalidEmail);
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| PlannerError::InvalidDate)?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| PlannerError::InvalidTime)?;
        let place_id = self
            .place_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(PlannerError::MissingPlace)?;
        Ok(PlannedVisit {
            email: email.to_lowercase(),
            date,
            time,
            place: LocationKey {
                kind: self.place_type,
                id: place_id.to_string(),
            },
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// A validated planner submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedVisit {
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: LocationKey,
}

impl PlannedVisit {
    pub fn notification_for(&self, user: &User) -> NotificationRequest {
        NotificationRequest {
            user_id: user.id.clone(),
            place_type: self.place.kind,
            place_id: self.place.id.clone(),
            visit_date: self.date.format("%Y-%m-%d").to_string(),
            visit_time: self.time.format("%H:%M").to_string(),
        }
    }
}

/// Header label for today, e.g. `Saturday, 18 Oct 2026`.
pub fn today_label() -> String {
    Local::now().format("%A, %-d %b %Y").to_string()
}
