//! Startup fetches.
//!
//! Every source loads in its own task so a slow or failing endpoint never
//! holds back the others. Failures degrade to empty lists (logged) and the
//! map keeps working with whatever did arrive.

use crate::browser;
use crate::map_bridge;
use crate::state::{AppState, Services, FETCH_COUNT};
use dioxus::prelude::*;
use swim_api::Degrade;
use swim_core::geo::DEFAULT_CENTER;
use swim_core::location::{normalize_beaches, normalize_rivers};

/// Start all fetches. Must be called from inside a Dioxus scope.
pub fn load_all(mut state: AppState, services: Services) {
    state.pending.set(FETCH_COUNT);

    let api = services.api.clone();
    spawn(async move {
        let beaches = api.beaches().await.or_degrade("beaches");
        log::info!("Loaded {} beaches", beaches.len());
        state.beaches.set(normalize_beaches(beaches));
        state.finish_fetch();
    });

    let api = services.api.clone();
    spawn(async move {
        let rivers = api.rivers().await.or_degrade("rivers");
        log::info!("Loaded {} rivers", rivers.len());
        state.rivers.set(normalize_rivers(rivers));
        state.finish_fetch();
    });

    let api = services.api.clone();
    spawn(async move {
        let toilets = api.toilets().await.or_degrade("toilets");
        log::info!("Loaded {} toilets", toilets.len());
        state.toilets.set(toilets);
        state.finish_fetch();
    });

    let api = services.api.clone();
    spawn(async move {
        let fountains = api.water_fountains().await.or_degrade("water fountains");
        log::info!("Loaded {} water fountains", fountains.len());
        state.fountains.set(fountains);
        state.finish_fetch();
    });

    // Area weather starts at the default centre so it never waits on the
    // permission prompt. It is fetched again once a position arrives.
    let weather = services.weather.clone();
    spawn(async move {
        let area = weather.current(DEFAULT_CENTER).await.map(Some).or_degrade("area weather");
        if (state.user_position)().is_none() {
            state.area_weather.set(area);
        }
        state.finish_fetch();
    });

    let weather = services.weather;
    spawn(async move {
        let Some(here) = browser::current_position().await else {
            return;
        };
        state.user_position.set(Some(here));
        map_bridge::show_user_position(here);
        let area = weather.current(here).await.map(Some).or_degrade("weather at user position");
        if area.is_some() {
            state.area_weather.set(area);
        }
    });
}
