//! SwimSafe
//!
//! Beaches and rivers with their water quality, plus public toilets and
//! drinking fountains, on a Leaflet map.
//!
//! Data flow:
//! 1. On mount the API clients are built from the compile-time config and
//!    every source is fetched concurrently (`swim_ui::loader`).
//! 2. Beaches and rivers are normalized into `Location`s as they arrive;
//!    the `Pipeline` memos combine them with the user's distance and narrow
//!    them by the search text and filters.
//! 3. An effect turns the visible locations and the toggled amenity layers
//!    into markers. Marker clicks come back as keys and resolve to the
//!    record shown in the detail panel.

use dioxus::prelude::*;
use swim_api::ApiConfig;
use swim_core::geo::DEFAULT_CENTER;
use swim_core::marker::{self, MarkerKey, Selection};
use swim_ui::components::{
    ErrorDisplay, FilterSidebar, FountainInfo, LocationInfo, MapContainer, PlannerDialog, SiteHeader, ToiletInfo,
};
use swim_ui::state::{use_pipeline, AppState, Services};
use swim_ui::{loader, map_bridge};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let pipeline = use_pipeline(state);

    // Build clients and start fetching on mount
    use_effect(move || {
        map_bridge::init_map(DEFAULT_CENTER);
        let config = ApiConfig::from_build_env();
        log::info!("Using API at {}", config.base_url);
        match Services::new(&config) {
            Ok(services) => {
                state.services.set(Some(services.clone()));
                loader::load_all(state, services);
            }
            Err(e) => {
                log::error!("Failed to configure API client: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to configure API client: {}", e)));
            }
        }
    });

    // Re-render markers whenever the visible subset or amenity layers change
    use_effect(move || {
        let markers = marker::build_markers(
            &pipeline.visible.read(),
            &state.toilets.read(),
            &state.fountains.read(),
            &state.filters.read(),
        );
        map_bridge::render_markers(&markers);
    });

    use_effect(move || {
        if let Some(target) = (state.zoom_target)() {
            map_bridge::focus(target);
        }
    });

    // Marker clicks arrive as `layer:id` keys
    use_future(move || async move {
        let mut clicks = map_bridge::marker_clicks();
        while let Ok(raw) = clicks.recv::<String>().await {
            let key = match raw.parse::<MarkerKey>() {
                Ok(key) => key,
                Err(e) => {
                    log::warn!("Ignoring marker click: {}", e);
                    continue;
                }
            };
            let selection = marker::resolve(
                &key,
                &pipeline.all.read(),
                &state.toilets.read(),
                &state.fountains.read(),
            );
            match selection {
                Some(selection) => state.selection.set(Some(selection)),
                None => log::warn!("No record behind marker {}", key),
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            SiteHeader { title: "SwimSafe".to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            div {
                style: "display: flex; flex: 1; min-height: 0;",
                FilterSidebar {}
                div {
                    style: "flex: 1; position: relative;",
                    MapContainer { loading: state.is_loading() }
                    SelectionPanel {}
                }
            }

            PlannerDialog {}
        }
    }
}

/// Detail panel for whatever is selected, keyed so a new selection
/// remounts the panel and refetches its details.
#[component]
fn SelectionPanel() -> Element {
    let state = use_context::<AppState>();

    match (state.selection)() {
        None => rsx! {},
        Some(Selection::Location(location)) => rsx! {
            LocationInfo { key: "{location.key()}", location }
        },
        Some(Selection::Toilet(toilet)) => rsx! {
            ToiletInfo { key: "toilet:{toilet.id}", toilet }
        },
        Some(Selection::Fountain(fountain)) => rsx! {
            FountainInfo { key: "fountain:{fountain.id}", fountain }
        },
    }
}
