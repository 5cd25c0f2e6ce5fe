//! Detail panel for a beach or river.

use crate::browser;
use crate::components::info_panel::{action_button_style, ACTION_ROW_STYLE};
use crate::components::{InfoPanel, StatusBadge};
use crate::state::AppState;
use dioxus::prelude::*;
use swim_api::Degrade;
use swim_core::location::Location;
use swim_core::marker::Selection;
use swim_core::planner::PlannerForm;
use swim_core::weather::Weather;

#[derive(Props, Clone, PartialEq)]
pub struct LocationInfoProps {
    pub location: Location,
}

/// Water quality, advice and weather for the selected location, with
/// Planner and Directions actions.
///
/// Weather is fetched for the location's own coordinates; key the component
/// by location so a new selection refetches.
#[component]
pub fn LocationInfo(props: LocationInfoProps) -> Element {
    let mut state = use_context::<AppState>();
    let coordinates = props.location.coordinates;

    let weather = use_resource(move || async move {
        let services = (state.services)()?;
        services
            .weather
            .current(coordinates?)
            .await
            .map(Some)
            .or_degrade("location weather")
    });

    let weather_text = match &*weather.read() {
        None => "Loading weather...".to_string(),
        Some(None) => "Weather unavailable".to_string(),
        Some(Some(w)) => weather_line(w),
    };

    let location = props.location.clone();
    let planner_key = props.location.key();
    let subtitle = match props.location.distance_label() {
        Some(distance) => format!("{} · {} away", props.location.kind.display_name(), distance),
        None => props.location.kind.display_name().to_string(),
    };

    rsx! {
        InfoPanel {
            title: props.location.name.clone(),
            subtitle,
            on_close: move |_| state.selection.set(None),

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                StatusBadge { status: props.location.status, label: props.location.status_label.clone() }
                span { style: "font-size: 13px;", "{props.location.status.advice()}" }
            }

            if let Some(tested) = &props.location.last_tested {
                p { style: "margin: 6px 0 0 0; font-size: 11px; color: #90A4AE;", "Last tested {tested}" }
            }

            p {
                style: "margin: 10px 0 0 0; font-size: 13px;",
                "{weather_text}"
            }

            if !props.location.description.is_empty() {
                p { style: "margin: 10px 0 0 0; font-size: 13px; color: #455A64;", "{props.location.description}" }
            }

            div {
                style: ACTION_ROW_STYLE,
                button {
                    style: action_button_style(false),
                    onclick: move |_| state.selection.set(None),
                    "Close"
                }
                button {
                    style: action_button_style(false),
                    onclick: move |_| state.open_planner(PlannerForm::new(Some(planner_key.clone()))),
                    "Planner"
                }
                button {
                    style: action_button_style(true),
                    onclick: move |_| browser::open_directions(&Selection::Location(location.clone())),
                    "Directions"
                }
            }
        }
    }
}

fn weather_line(weather: &Weather) -> String {
    let mut parts = vec![weather.temperature_label()];
    if let Some(summary) = weather.summary() {
        parts.push(summary.to_string());
    }
    if let Some(wind) = weather.wind_kmh() {
        parts.push(format!("wind {:.0} km/h", wind));
    }
    parts.join(" · ")
}
