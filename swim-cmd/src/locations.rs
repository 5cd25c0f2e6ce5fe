//! `locations`: fetch, normalize, combine and filter beaches and rivers.

use futures::join;
use swim_api::{Degrade, SwimClient};
use swim_core::filter::{self, DistanceBucket, FilterOutcome, FilterState, ShowOnMap, NO_RESULTS_MESSAGE};
use swim_core::geo::Coordinates;
use swim_core::location::{self, Location, SafetyStatus};

pub fn filters(
    quality: Option<SafetyStatus>,
    distance: Option<DistanceBucket>,
    show: ShowOnMap,
) -> FilterState {
    FilterState {
        water_quality: quality,
        distance,
        show_on_map: show,
        ..FilterState::default()
    }
}

/// Fetch both sources concurrently and combine them; a failed source
/// contributes nothing.
pub async fn fetch_locations(client: &SwimClient, origin: Option<Coordinates>) -> Vec<Location> {
    let (beaches, rivers) = join!(client.beaches(), client.rivers());
    let beaches = location::normalize_beaches(beaches.or_degrade("beaches"));
    let rivers = location::normalize_rivers(rivers.or_degrade("rivers"));
    location::combine(&beaches, &rivers, origin)
}

pub fn format_row(location: &Location) -> String {
    let distance = location.distance_label().unwrap_or_else(|| "-".to_string());
    format!(
        "{:<8} {:<6} {:<28} {:<8} {:<14} {:>9}",
        location.key().to_string(),
        location.kind.as_str(),
        location.name,
        location.status.display_name(),
        location.status_label,
        distance
    )
}

pub async fn run_locations(
    client: &SwimClient,
    filters: &FilterState,
    search: &str,
    near: Option<Coordinates>,
    json: bool,
) -> anyhow::Result<()> {
    let all = fetch_locations(client, near).await;
    let outcome = FilterOutcome::from_visible(filter::apply(&all, filters, search));
    log::info!("{} of {} locations visible", outcome.locations().len(), all.len());

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.locations())?);
        return Ok(());
    }
    match outcome {
        FilterOutcome::NoResults => println!("{}", NO_RESULTS_MESSAGE),
        FilterOutcome::Matches(visible) => {
            for location in &visible {
                println!("{}", format_row(location));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swim_api::ApiConfig;
    use swim_core::location::LocationKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_locations_survives_failed_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/beaches"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rivers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "id": "river-001", "name": "Yarra", "lat": -37.82, "lon": 144.98, "status": "Good" }]
            })))
            .mount(&server)
            .await;

        let client = SwimClient::new(&ApiConfig::default().with_base_url(server.uri())).unwrap();
        let origin = Coordinates::new(-37.8136, 144.9631);
        let all = fetch_locations(&client, Some(origin)).await;

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].kind, LocationKind::River);
        assert_eq!(all[0].status, SafetyStatus::Safe);
        assert!(all[0].distance_km.is_some());

        let near = filters(None, Some(DistanceBucket::Near), ShowOnMap::All);
        assert_eq!(filter::apply(&all, &near, "yarra").len(), 1);
        let beaches_only = filters(None, None, ShowOnMap::Beaches);
        assert!(filter::apply(&all, &beaches_only, "").is_empty());
    }
}
