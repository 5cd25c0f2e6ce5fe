//! Integration tests for `SwimClient` and `WeatherClient` using wiremock HTTP mocks.

use serde_json::json;
use swim_api::{ApiConfig, ApiError, Degrade, SwimClient, WeatherClient};
use swim_core::amenity::RatingForm;
use swim_core::geo::Coordinates;
use swim_core::location::{normalize_beaches, LocationKind, SafetyStatus};
use swim_core::planner::PlannerForm;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> SwimClient {
    let config = ApiConfig::default().with_base_url(format!("{}/api/v1", server.uri()));
    SwimClient::new(&config).expect("client construction should not fail")
}

#[tokio::test]
async fn beaches_are_read_from_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "name": "Test Beach",
                "lat": -37.8679,
                "lon": 144.974,
                "avg_enterococci": 12,
                "description_tips": "Clean beach"
            }]
        })))
        .mount(&server)
        .await;

    let records = test_client(&server).beaches().await.expect("should parse beaches");
    let locations = normalize_beaches(records);
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].name, "Test Beach");
    assert_eq!(locations[0].kind, LocationKind::Beach);
    assert_eq!(locations[0].status, SafetyStatus::Safe);
}

#[tokio::test]
async fn null_fields_do_not_drop_the_whole_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "name": "St Kilda", "lat": -37.8679, "lon": 144.974, "avg_enterococci": 12 },
                { "id": 2, "name": null, "lat": null, "lon": null, "avg_enterococci": null }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/toilet-ratings/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "toilet_id": 5, "comment": "Spotless", "rating": 5 },
            { "toilet_id": 5, "comment": null, "rating": 2 }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let beaches = client.beaches().await.or_degrade("beaches");
    assert_eq!(beaches.len(), 2);
    assert_eq!(beaches[0].name, "St Kilda");
    assert_eq!(beaches[1].name, "");

    let comments = client.latest_toilet_comments().await.or_degrade("toilet comments");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].comment, "Spotless");
    assert_eq!(comments[1].comment, "");
}

#[tokio::test]
async fn toilets_are_read_as_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/toilets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "toilet_name": "Test Toilet", "lat": -37.86, "lon": 144.97 },
            { "id": "2", "name": "Pier Toilet" }
        ])))
        .mount(&server)
        .await;

    let toilets = test_client(&server).toilets().await.expect("should parse toilets");
    assert_eq!(toilets.len(), 2);
    assert_eq!(toilets[1].id, "2");
    assert_eq!(toilets[1].toilet_name, "Pier Toilet");
}

#[tokio::test]
async fn failed_source_does_not_block_the_others() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/beaches"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/rivers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/water-fountains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 5, "lat": -37.85, "lon": 144.96 }])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let (beaches, rivers, fountains) = futures::join!(client.beaches(), client.rivers(), client.water_fountains());

    assert!(matches!(beaches, Err(ApiError::Status { status: 500, .. })));
    assert!(matches!(rivers, Err(ApiError::Deserialize { .. })));
    assert!(beaches.or_degrade("beaches").is_empty());
    assert!(rivers.or_degrade("rivers").is_empty());
    assert_eq!(fountains.or_degrade("fountains").len(), 1);
}

#[tokio::test]
async fn unknown_user_is_none_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/search"))
        .and(query_param("email", "nobody@example.com"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "not found" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_eq!(client.find_user_by_email("nobody@example.com").await.unwrap(), None);
    assert_eq!(client.user("9").await.unwrap(), None);
}

#[tokio::test]
async fn rating_submission_posts_exact_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/toilet-ratings"))
        .and(body_json(json!({
            "toilet_id": "1",
            "is_clean": false,
            "rating": 3,
            "comment": "Great toilet!"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = RatingForm::default();
    form.is_clean = Some(false);
    form.set_rating(3);
    form.comment = "Great toilet!".to_string();
    let payload = form.build("1").unwrap();

    let outcome = test_client(&server).submit_toilet_rating(&payload).await;
    assert!(outcome.success);
    assert_eq!(outcome.error, None);
}

#[tokio::test]
async fn rating_submission_failure_is_reported_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/toilet-ratings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut form = RatingForm::default();
    form.is_clean = Some(true);
    form.set_rating(5);
    let outcome = test_client(&server)
        .submit_toilet_rating(&form.build("1").unwrap())
        .await;
    assert!(!outcome.success);
    assert!(outcome.error.unwrap().contains("500"));
}

#[tokio::test]
async fn toilet_detail_degrades_average_and_filters_comments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/toilets/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "toilet_name": "Test Toilet", "opening_hours": "9am - 5pm", "lat": -37.85, "lon": 144.96
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/toilet-ratings/average/3"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/toilet-ratings/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "toilet_id": 3, "comment": "Clean toilet!" },
            { "toilet_id": 4, "comment": "Other toilet" }
        ])))
        .mount(&server)
        .await;

    let detail = test_client(&server).toilet_detail("3").await.expect("toilet should load");
    assert_eq!(detail.toilet.opening_hours.as_deref(), Some("9am - 5pm"));
    assert_eq!(detail.average.average_rating, None);
    assert_eq!(detail.average.toilet_id, "3");
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].comment, "Clean toilet!");
}

#[tokio::test]
async fn missing_toilet_detail_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/toilets/77"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(test_client(&server).toilet_detail("77").await.is_none());
}

#[tokio::test]
async fn schedule_visit_creates_missing_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/search"))
        .and(query_param("email", "test@example.com"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .and(body_json(json!({ "email": "test@example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": { "id": 11, "email": "test@example.com" } })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/notifications"))
        .and(body_json(json!({
            "user_id": "11",
            "place_type": "river",
            "place_id": "river-002",
            "visit_date": "2025-10-10",
            "visit_time": "15:30"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let form = PlannerForm {
        email: "test@example.com".to_string(),
        date: "2025-10-10".to_string(),
        time: "15:30".to_string(),
        place_type: LocationKind::River,
        place_id: Some("river-002".to_string()),
    };
    let user = test_client(&server)
        .schedule_visit(&form.validate().unwrap())
        .await
        .expect("reminder should be registered");
    assert_eq!(user.id, "11");
}

#[tokio::test]
async fn weather_by_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "-37.85"))
        .and(query_param("lon", "144.96"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "main": { "temp": 25 } })))
        .mount(&server)
        .await;

    let config = ApiConfig::default()
        .with_weather_url(format!("{}/data/2.5/weather", server.uri()))
        .with_weather_api_key(Some("test-key".to_string()));
    let weather = WeatherClient::new(&config)
        .unwrap()
        .current(Coordinates::new(-37.85, 144.96))
        .await
        .expect("should parse weather");
    assert_eq!(weather.temperature_label(), "25°C");
}

#[tokio::test]
async fn weather_without_key_degrades_to_none() {
    let weather = WeatherClient::new(&ApiConfig::default())
        .unwrap()
        .current(Coordinates::new(-37.85, 144.96))
        .await;
    assert!(matches!(weather, Err(ApiError::Config(_))));
    assert_eq!(weather.map(Some).or_degrade("weather"), None);
}
