//! HTTP client for the SwimSafe REST API.
//!
//! Wraps `reqwest` with URL building against a configurable base, typed
//! response decoding and the envelope handling the API uses for lists
//! (`{"data": [...]}` on some endpoints, bare arrays on others).

use crate::config::ApiConfig;
use crate::degrade::Degrade;
use crate::error::ApiError;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use swim_core::amenity::{
    SubmitOutcome, Toilet, ToiletAverage, ToiletComment, ToiletDetail, ToiletRating, WaterFountain,
};
use swim_core::location::{BeachRecord, RiverRecord};
use swim_core::planner::{NewUser, NotificationRequest, User};

/// A list served either bare or wrapped in a `data` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Envelope { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Envelope { data } => data,
            Listing::Bare(items) => items,
        }
    }
}

/// A single record served either bare or wrapped in a `data` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum Single<T> {
    Envelope { data: T },
    Bare(T),
}

impl<T> Single<T> {
    fn into_inner(self) -> T {
        match self {
            Single::Envelope { data } => data,
            Single::Bare(item) => item,
        }
    }
}

/// Client for the SwimSafe REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct SwimClient {
    client: Client,
    base_url: Url,
}

impl SwimClient {
    /// Build a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Config`] if the base URL does not parse, [`ApiError::Http`]
    /// if the `reqwest` client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder.build()?;

        // A trailing slash makes `Url::join` append to the API root instead
        // of replacing its last segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{}': {}", config.base_url, e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Config(format!("invalid path '{}': {}", path, e)))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, context: &str) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        // Write endpoints may acknowledge with an empty body.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(|source| ApiError::Deserialize {
            context: context.to_string(),
            source,
        })
    }

    /// `collection/id` with the id percent-encoded as a single path segment.
    fn record_url(&self, collection: &str, id: &str) -> Result<Url, ApiError> {
        let mut url = self.url(collection)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("base URL cannot hold path '{}'", collection)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let context = format!("GET {}", url.path());
        log::debug!("GET {}", url);
        let response = self.client.get(url).query(query).send().await?;
        Self::decode(response, &context).await
    }

    /// Like `get_json`, but HTTP 404 means "no such record".
    async fn get_optional<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, ApiError> {
        let context = format!("GET {}", url.path());
        log::debug!("GET {}", url);
        let response = self.client.get(url).query(query).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(response, &context).await.map(Some)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.url(path)?;
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        Self::decode(response, &format!("POST /{}", path)).await
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self.get_json(self.url(path)?, &[]).await?;
        Ok(listing.into_vec())
    }

    pub async fn beaches(&self) -> Result<Vec<BeachRecord>, ApiError> {
        self.list("beaches").await
    }

    pub async fn rivers(&self) -> Result<Vec<RiverRecord>, ApiError> {
        self.list("rivers").await
    }

    pub async fn toilets(&self) -> Result<Vec<Toilet>, ApiError> {
        self.list("toilets").await
    }

    pub async fn toilet(&self, id: &str) -> Result<Option<Toilet>, ApiError> {
        let toilet: Option<Single<Toilet>> = self.get_optional(self.record_url("toilets", id)?, &[]).await?;
        Ok(toilet.map(Single::into_inner))
    }

    pub async fn toilet_average(&self, id: &str) -> Result<ToiletAverage, ApiError> {
        self.get_json(self.record_url("toilet-ratings/average", id)?, &[]).await
    }

    /// Latest comments across every toilet, newest first.
    pub async fn latest_toilet_comments(&self) -> Result<Vec<ToiletComment>, ApiError> {
        self.list("toilet-ratings/latest").await
    }

    /// Toilet, average rating and its comments, fetched concurrently.
    ///
    /// The average and comments degrade independently; `None` only when the
    /// toilet itself cannot be loaded.
    pub async fn toilet_detail(&self, id: &str) -> Option<ToiletDetail> {
        let (toilet, average, latest) = futures::join!(
            self.toilet(id),
            self.toilet_average(id),
            self.latest_toilet_comments()
        );
        let toilet = toilet.or_degrade("toilet")?;
        let average = average.or_degrade_with("toilet average", || ToiletAverage::unrated(id));
        let latest = latest.or_degrade("toilet comments");
        Some(ToiletDetail::new(toilet, average, latest))
    }

    /// Submit a rating. Never fails: errors come back as an unsuccessful outcome.
    pub async fn submit_toilet_rating(&self, rating: &ToiletRating) -> SubmitOutcome {
        match self.post_json::<_, Option<SubmitOutcome>>("toilet-ratings", rating).await {
            Ok(outcome) => outcome.unwrap_or_else(SubmitOutcome::ok),
            Err(e) => {
                log::error!("Failed to submit rating for toilet {}: {}", rating.toilet_id, e);
                SubmitOutcome::failed(e.to_string())
            }
        }
    }

    pub async fn water_fountains(&self) -> Result<Vec<WaterFountain>, ApiError> {
        self.list("water-fountains").await
    }

    pub async fn water_fountain(&self, id: &str) -> Result<Option<WaterFountain>, ApiError> {
        let fountain: Option<Single<WaterFountain>> =
            self.get_optional(self.record_url("water-fountains", id)?, &[]).await?;
        Ok(fountain.map(Single::into_inner))
    }

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.list("users").await
    }

    pub async fn user(&self, id: &str) -> Result<Option<User>, ApiError> {
        let user: Option<Single<User>> = self.get_optional(self.record_url("users", id)?, &[]).await?;
        Ok(user.map(Single::into_inner))
    }

    /// Look a user up by email. A 404 is a valid "no such user".
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let user: Option<Single<User>> = self.get_optional(self.url("users/search")?, &[("email", email)]).await?;
        Ok(user.map(Single::into_inner))
    }

    pub async fn create_user(&self, email: &str) -> Result<User, ApiError> {
        let user: Single<User> = self
            .post_json(
                "users",
                &NewUser {
                    email: email.to_string(),
                },
            )
            .await?;
        Ok(user.into_inner())
    }

    /// Register a reminder. Returns the server's acknowledgement as-is.
    pub async fn create_notification(&self, request: &NotificationRequest) -> Result<serde_json::Value, ApiError> {
        self.post_json("notifications", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let client = SwimClient::new(&ApiConfig::default().with_base_url("http://localhost:5000/api/v1///")).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/v1/");
        assert_eq!(
            client.url("/toilet-ratings/average/3").unwrap().as_str(),
            "http://localhost:5000/api/v1/toilet-ratings/average/3"
        );
    }

    #[test]
    fn test_record_ids_are_one_escaped_segment() {
        let client = SwimClient::new(&ApiConfig::default().with_base_url("http://localhost:5000/api/v1")).unwrap();
        assert_eq!(
            client.record_url("toilets", "3").unwrap().as_str(),
            "http://localhost:5000/api/v1/toilets/3"
        );
        assert_eq!(
            client.record_url("toilets", "3/../users?x=1").unwrap().as_str(),
            "http://localhost:5000/api/v1/toilets/3%2F..%2Fusers%3Fx=1"
        );
        assert_eq!(
            client.record_url("toilet-ratings/average", "a b").unwrap().as_str(),
            "http://localhost:5000/api/v1/toilet-ratings/average/a%20b"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = SwimClient::new(&ApiConfig::default().with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_listing_accepts_both_shapes() {
        let wrapped: Listing<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(wrapped.into_vec(), vec![1, 2]);
        let bare: Listing<u32> = serde_json::from_str("[3]").unwrap();
        assert_eq!(bare.into_vec(), vec![3]);
    }
}
