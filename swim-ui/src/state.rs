//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single `Copy` struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The derived location pipeline lives in
//! [`Pipeline`], built once by the app with [`use_pipeline`].

use dioxus::prelude::*;
use swim_api::{ApiConfig, SwimClient, WeatherClient};
use swim_core::amenity::{Toilet, WaterFountain};
use swim_core::filter::{self, FilterState};
use swim_core::geo::Coordinates;
use swim_core::location::{self, Location};
use swim_core::marker::Selection;
use swim_core::planner::PlannerForm;
use swim_core::weather::Weather;

/// Number of independent fetches started on mount (beaches, rivers,
/// toilets, fountains, weather).
pub const FETCH_COUNT: u8 = 5;

/// HTTP clients shared by every component.
#[derive(Clone, Debug)]
pub struct Services {
    pub api: SwimClient,
    pub weather: WeatherClient,
}

impl Services {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        Ok(Self {
            api: SwimClient::new(config)?,
            weather: WeatherClient::new(config)?,
        })
    }
}

/// Shared application state for the SwimSafe map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API clients (None until configured)
    pub services: Signal<Option<Services>>,
    /// Fatal error, e.g. unusable API configuration
    pub error_msg: Signal<Option<String>>,
    /// Fetches still in flight
    pub pending: Signal<u8>,
    /// Normalized beaches, replaced wholesale on each fetch
    pub beaches: Signal<Vec<Location>>,
    /// Normalized rivers, replaced wholesale on each fetch
    pub rivers: Signal<Vec<Location>>,
    pub toilets: Signal<Vec<Toilet>>,
    pub fountains: Signal<Vec<WaterFountain>>,
    /// Browser geolocation, if the user allowed it
    pub user_position: Signal<Option<Coordinates>>,
    /// Weather at the user position (or the default map centre)
    pub area_weather: Signal<Option<Weather>>,
    pub filters: Signal<FilterState>,
    pub search: Signal<String>,
    /// Record behind the clicked marker or chosen suggestion
    pub selection: Signal<Option<Selection>>,
    /// Where the map should pan to next
    pub zoom_target: Signal<Option<Coordinates>>,
    /// Open planner dialog, if any
    pub planner: Signal<Option<PlannerForm>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            services: Signal::new(None),
            error_msg: Signal::new(None),
            pending: Signal::new(0),
            beaches: Signal::new(Vec::new()),
            rivers: Signal::new(Vec::new()),
            toilets: Signal::new(Vec::new()),
            fountains: Signal::new(Vec::new()),
            user_position: Signal::new(None),
            area_weather: Signal::new(None),
            filters: Signal::new(FilterState::default()),
            search: Signal::new(String::new()),
            selection: Signal::new(None),
            zoom_target: Signal::new(None),
            planner: Signal::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        (self.pending)() > 0
    }

    /// Mark one fetch as complete.
    pub fn finish_fetch(&mut self) {
        let remaining = (self.pending)().saturating_sub(1);
        self.pending.set(remaining);
    }

    /// Restore default filters and clear the search text.
    pub fn reset_filters(&mut self) {
        self.filters.write().reset();
        self.search.set(String::new());
    }

    /// Select a location from the list or suggestions and pan to it.
    pub fn select_location(&mut self, location: Location) {
        if let Some(coords) = location.coordinates {
            self.zoom_target.set(Some(coords));
        }
        self.selection.set(Some(Selection::Location(location)));
    }

    pub fn open_planner(&mut self, form: PlannerForm) {
        self.selection.set(None);
        self.planner.set(Some(form));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived, memoized stages of the location pipeline.
#[derive(Clone, Copy, PartialEq)]
pub struct Pipeline {
    /// Beaches and rivers with distances from the user.
    pub all: Memo<Vec<Location>>,
    /// `all` narrowed by the search text and filters.
    pub visible: Memo<Vec<Location>>,
}

/// Build the pipeline memos over `state` and provide them as context.
///
/// `all` re-runs when either source list or the user position changes;
/// `visible` re-runs when `all`, the filters or the search text change.
pub fn use_pipeline(state: AppState) -> Pipeline {
    let all = use_memo(move || {
        location::combine(&state.beaches.read(), &state.rivers.read(), (state.user_position)())
    });
    let visible = use_memo(move || filter::apply(&all.read(), &state.filters.read(), &state.search.read()));
    use_context_provider(|| Pipeline { all, visible })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use swim_core::location::SafetyStatus;

    thread_local! {
        static RAN: Cell<bool> = const { Cell::new(false) };
    }

    fn harness(check: fn()) -> Element {
        use_hook(|| {
            check();
            RAN.with(|ran| ran.set(true));
        });
        rsx! {}
    }

    /// Run `check` once inside a live Dioxus runtime so signals can be created.
    fn in_app(check: fn()) {
        RAN.with(|ran| ran.set(false));
        let mut dom = VirtualDom::new_with_props(harness, check);
        dom.rebuild_in_place();
        assert!(RAN.with(Cell::get), "state checks did not run");
    }

    #[test]
    fn test_reset_filters_clears_search_text() {
        in_app(|| {
            let mut state = AppState::new();
            state.filters.write().toggle_water_quality(SafetyStatus::Safe);
            state.search.set("kilda".to_string());
            assert!(!state.filters.read().is_default());

            state.reset_filters();
            assert!(state.filters.read().is_default());
            assert_eq!((state.filters)(), FilterState::default());
            assert!(state.search.read().is_empty());
        });
    }

    #[test]
    fn test_loading_ends_after_every_fetch_without_a_position() {
        in_app(|| {
            let mut state = AppState::new();
            state.pending.set(FETCH_COUNT);
            for _ in 0..FETCH_COUNT {
                assert!(state.is_loading());
                state.finish_fetch();
            }
            assert!(!state.is_loading());
            assert_eq!((state.user_position)(), None);

            state.finish_fetch();
            assert_eq!((state.pending)(), 0);
        });
    }
}
